//! Record name derivation.
//!
//! A record is named after its file, or after the directory holding it,
//! cut at the first `.` and restricted to ASCII letters and underscores.

use std::path::Path;

/// Where the raw name of a record comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameSource {
    /// The file's own name
    #[default]
    FileName,
    /// The name of the directory containing the file
    ParentDir,
}

impl NameSource {
    pub fn from_flag(name_from_dir: bool) -> Self {
        if name_from_dir {
            NameSource::ParentDir
        } else {
            NameSource::FileName
        }
    }
}

/// A name before and after sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidate {
    pub raw: String,
    pub sanitized: String,
}

impl NameCandidate {
    /// Whether sanitization changed the name.
    pub fn is_renamed(&self) -> bool {
        self.raw != self.sanitized
    }
}

/// Derives the raw and sanitized name for `path`.
///
/// Everything from the first `.` on is dropped, so `foo.bar.json`
/// yields `foo`.
pub fn resolve_name(path: &Path, source: NameSource) -> NameCandidate {
    let base = match source {
        NameSource::FileName => path.file_name(),
        NameSource::ParentDir => path.parent().and_then(Path::file_name),
    };
    let base = base.map(|name| name.to_string_lossy()).unwrap_or_default();
    let raw = base.split('.').next().unwrap_or_default().to_string();
    let sanitized = sanitize(&raw);
    NameCandidate { raw, sanitized }
}

/// Keeps ASCII letters, spaces and underscores, then turns spaces into
/// underscores.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ' || *c == '_')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
