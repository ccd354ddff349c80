//! Configuration handling for collectkit.
//! Loads the tool configuration (collect.json, collect.yml or collect.yaml)
//! and resolves the paths it refers to.

use crate::constants::{CONFIG_FILES, DEFAULT_BUILD_ROOT, DEFAULT_SOURCE_ROOT, DEFAULT_TEST};
use crate::copier::CopySpec;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Tool configuration as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// File name of the generated artifact inside the destination directory
    pub destination: String,
    /// Template file, relative to the configuration file
    pub template: PathBuf,
    /// Literal placeholder token
    pub placeholder: String,
    /// MiniJinja template for one expanded line
    pub line_template: String,
    /// File pattern used when `--test` is not given
    #[serde(default = "default_test")]
    pub default_test: String,
    /// Directory `--source` is resolved against
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,
    /// Directory the positional destination is resolved against
    #[serde(default = "default_build_root")]
    pub build_root: PathBuf,
    /// Auxiliary files mirrored into the destination
    #[serde(default)]
    pub copy: Vec<CopySpec>,
}

fn default_test() -> String {
    DEFAULT_TEST.to_string()
}

fn default_source_root() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_ROOT)
}

fn default_build_root() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_ROOT)
}

/// Finds the configuration file.
///
/// `path` may name the file itself or a directory holding one of
/// [`CONFIG_FILES`].
///
/// # Errors
/// * `Error::ConfigError` if no configuration file exists
pub fn find_config<P: AsRef<Path>>(path: P, config_files: &[&str]) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    for file in config_files {
        let config_path = path.join(file);
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found in {} (tried: {})",
        path.display(),
        config_files.join(", ")
    )))
}

/// Parses configuration content. JSON is tried first, then YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

impl Config {
    /// Checks that everything the run depends on is in place.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the template or a copy source is missing,
    ///   or the placeholder is empty
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(Error::ConfigError("placeholder must not be empty".to_string()));
        }
        if !self.template.is_file() {
            return Err(Error::ConfigError(format!(
                "Template {} doesn't exist",
                self.template.display()
            )));
        }
        for spec in &self.copy {
            if !spec.source.exists() {
                return Err(Error::ConfigError(format!(
                    "Expected data path {} is missing",
                    spec.source.display()
                )));
            }
        }
        Ok(())
    }
}

/// Loads, resolves and validates the configuration found at `path`.
///
/// The template path is made relative to the configuration file's
/// directory; copy sources stay relative to the working directory.
pub fn get_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config_path = find_config(path, &CONFIG_FILES)?;
    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;
    let mut config = parse_config(&content)?;
    if let Some(base) = config_path.parent() {
        config.template = base.join(&config.template);
    }
    config.validate()?;
    Ok(config)
}
