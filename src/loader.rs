//! Structured data loading for collected files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};

/// Trait for decoding a data file into a value.
pub trait DataLoader {
    /// Reads and decodes the file at `path`.
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be opened
    /// * `Error::ParseError` if the contents are not valid structured data
    fn load(&self, path: &Path) -> Result<serde_json::Value>;
}

/// YAML based loader. YAML is a superset of JSON, so both are accepted.
#[derive(Debug, Default)]
pub struct YamlLoader;

impl YamlLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DataLoader for YamlLoader {
    fn load(&self, path: &Path) -> Result<serde_json::Value> {
        let file = File::open(path)?;
        serde_yaml::from_reader(BufReader::new(file))
            .map_err(|source| Error::ParseError { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_loads_yaml_and_json() {
        let temp_dir = TempDir::new().unwrap();
        let yaml = temp_dir.path().join("a.yml");
        let json = temp_dir.path().join("b.json");
        fs::write(&yaml, "steps:\n  - 1\n  - 2\n").unwrap();
        fs::write(&json, r#"{"title": "x"}"#).unwrap();

        let loader = YamlLoader::new();
        assert_eq!(loader.load(&yaml).unwrap(), serde_json::json!({"steps": [1, 2]}));
        assert_eq!(loader.load(&json).unwrap(), serde_json::json!({"title": "x"}));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{\"a\": [1, 2").unwrap();

        match YamlLoader::new().load(&path) {
            Err(Error::ParseError { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }
}
