//! Run diagnostics.
//!
//! Pipeline stages never log directly. They receive a [`Reporter`] and
//! describe what happened; the binary plugs in [`LogReporter`], tests plug
//! in their own implementation.

use log::{debug, info, warn};
use std::path::Path;

/// Receives the observable events of a run.
pub trait Reporter {
    /// A data file was collected under `name`.
    fn included(&self, name: &str, path: &Path);

    /// Sanitization changed a record name.
    fn renamed(&self, raw: &str, name: &str);

    /// A second file resolved to an already collected name.
    fn collision(&self, name: &str, path: &Path);

    /// The generated artifact was written.
    fn written(&self, destination: &Path, entries: usize);

    /// An auxiliary file was copied.
    fn copied(&self, source: &Path, destination: &Path);

    /// An auxiliary file was left alone because the destination is current.
    fn skipped(&self, destination: &Path);
}

/// Forwards events to the `log` facade.
///
/// Warnings always go through. Per-file traces are dropped in silent mode.
#[derive(Debug, Default)]
pub struct LogReporter {
    silent: bool,
}

impl LogReporter {
    pub fn new(silent: bool) -> Self {
        Self { silent }
    }
}

impl Reporter for LogReporter {
    fn included(&self, name: &str, path: &Path) {
        if !self.silent {
            info!("Included {} from {}", name, path.display());
        }
    }

    fn renamed(&self, raw: &str, name: &str) {
        warn!("collected file had name {raw:?}, but it was renamed to {name:?}");
    }

    fn collision(&self, name: &str, path: &Path) {
        warn!("multiple definitions for name {:?}, using {}", name, path.display());
    }

    fn written(&self, destination: &Path, entries: usize) {
        if !self.silent {
            info!("Destination {} created with {} entries.", destination.display(), entries);
        }
    }

    fn copied(&self, source: &Path, destination: &Path) {
        if !self.silent {
            info!("Copied {} -> {}", source.display(), destination.display());
        }
    }

    fn skipped(&self, destination: &Path) {
        debug!("Up to date: {}", destination.display());
    }
}
