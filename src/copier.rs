//! Incremental mirroring of auxiliary files into the build output.

use serde::Deserialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::reporter::Reporter;
use crate::walker::traverse;

/// A configured source directory and the entries to mirror from it.
///
/// Each entry is a file or directory name relative to `source`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CopySpec {
    pub source: PathBuf,
    #[serde(default)]
    pub files: Vec<String>,
}

/// A single file to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl CopyEntry {
    /// Whether the destination is missing or older than the source.
    pub fn is_stale(&self) -> Result<bool> {
        let destination = match fs::metadata(&self.destination) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(true),
            Err(e) => return Err(e.into()),
        };
        let source = fs::metadata(&self.source)?;
        Ok(destination.modified()? < source.modified()?)
    }
}

/// Expands `specs` into individual file pairs under `destination_root`.
///
/// Directory entries are walked without a depth limit and keep their
/// path relative to the configured source.
///
/// # Errors
/// * `Error::CopySourceMissingError` if a configured source does not exist
/// * `Error::TraversalError` if an expanded directory cannot be read
pub fn resolve_copy_entries(specs: &[CopySpec], destination_root: &Path) -> Result<Vec<CopyEntry>> {
    let mut entries = Vec::new();
    for spec in specs {
        if !spec.source.exists() {
            return Err(Error::CopySourceMissingError {
                source_dir: spec.source.display().to_string(),
            });
        }
        for name in &spec.files {
            let path = spec.source.join(name);
            if path.is_dir() {
                for file in traverse(&path, 0) {
                    let file = file?;
                    let relative = file
                        .strip_prefix(&spec.source)
                        .map_err(|e| Error::ConfigError(e.to_string()))?;
                    let destination = destination_root.join(relative);
                    entries.push(CopyEntry { source: file, destination });
                }
            } else {
                entries.push(CopyEntry { source: path, destination: destination_root.join(name) });
            }
        }
    }
    Ok(entries)
}

/// Copies every stale entry, preserving permissions and modification time.
///
/// Returns the number of files actually copied.
pub fn copy_entries(entries: &[CopyEntry], reporter: &dyn Reporter) -> Result<usize> {
    let mut copied = 0;
    for entry in entries {
        if let Some(parent) = entry.destination.parent() {
            fs::create_dir_all(parent)?;
        }
        if !entry.is_stale()? {
            reporter.skipped(&entry.destination);
            continue;
        }
        copy_file(&entry.source, &entry.destination)?;
        reporter.copied(&entry.source, &entry.destination);
        copied += 1;
    }
    Ok(copied)
}

fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    if destination.exists() {
        fs::remove_file(destination)?;
    }
    fs::copy(source, destination)?;
    let modified = fs::metadata(source)?.modified()?;
    File::open(destination)?.set_modified(modified)?;
    Ok(())
}
