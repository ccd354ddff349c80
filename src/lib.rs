//! collectkit is a build-time collection tool.
//! It walks a source tree, parses every matching data file, and expands the
//! collected name -> data mapping into the placeholder lines of a template.
//! Configured auxiliary files are mirrored into the build output alongside.

/// Command-line interface module
pub mod cli;

/// Ordered aggregation of parsed records
pub mod collector;

/// Tool configuration
/// Supports JSON and YAML formats (collect.json, collect.yml, collect.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Incremental copy of auxiliary files
pub mod copier;

/// Error types and handling
pub mod error;

/// Structured data decoding for collected files
pub mod loader;

/// Logger initialisation for the binary
pub mod logger;

/// Record name derivation and sanitization
pub mod name;

/// Run orchestration
pub mod processor;

/// Line template rendering
pub mod renderer;

/// Run diagnostics
pub mod reporter;

/// Placeholder expansion and atomic output
pub mod template;

/// Breadth-first directory traversal
pub mod walker;
