#![allow(dead_code)]

use collectkit::reporter::Reporter;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a run reported, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Included(String, PathBuf),
    Renamed(String, String),
    Collision(String, PathBuf),
    Written(PathBuf, usize),
    Copied(PathBuf, PathBuf),
    Skipped(PathBuf),
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: RefCell<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn collisions(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Collision(name, _) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn renames(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Renamed(raw, name) => Some((raw, name)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn included(&self, name: &str, path: &Path) {
        self.events.borrow_mut().push(Event::Included(name.to_string(), path.to_path_buf()));
    }

    fn renamed(&self, raw: &str, name: &str) {
        self.events.borrow_mut().push(Event::Renamed(raw.to_string(), name.to_string()));
    }

    fn collision(&self, name: &str, path: &Path) {
        self.events.borrow_mut().push(Event::Collision(name.to_string(), path.to_path_buf()));
    }

    fn written(&self, destination: &Path, entries: usize) {
        self.events.borrow_mut().push(Event::Written(destination.to_path_buf(), entries));
    }

    fn copied(&self, source: &Path, destination: &Path) {
        self.events
            .borrow_mut()
            .push(Event::Copied(source.to_path_buf(), destination.to_path_buf()));
    }

    fn skipped(&self, destination: &Path) {
        self.events.borrow_mut().push(Event::Skipped(destination.to_path_buf()));
    }
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}
