//! Error handling for collectkit.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a collection run.
///
/// Every variant is fatal. Non-fatal conditions (renamed names, name
/// collisions) are never errors; they go through [`crate::reporter::Reporter`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Configuration is missing, malformed or points at absent paths
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The source root is missing or is not a directory
    #[error("Source {source_dir} doesn't exist or isn't a directory")]
    SourceNotFoundError { source_dir: String },

    /// The generated artifact exists and no override was requested
    #[error("Destination {destination} exists. Use --force to overwrite it")]
    DestinationExistsError { destination: String },

    /// A matched data file could not be decoded
    #[error("Failed to parse '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A directory could not be enumerated during traversal
    #[error("Failed to read directory '{}': {source}", .path.display())]
    TraversalError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configured copy source vanished between validation and copying
    #[error("Expected data path {source_dir} is missing")]
    CopySourceMissingError { source_dir: String },

    /// The file pattern could not be compiled
    #[error("Invalid file pattern: {0}")]
    PatternError(#[from] globset::Error),

    /// The line template failed to compile or render
    #[error("Line template error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Collected data could not be encoded
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
