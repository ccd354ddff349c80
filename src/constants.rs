//! Common constants used throughout collectkit.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["collect.json", "collect.yml", "collect.yaml"];

/// File pattern used when neither `--test` nor `default_test` is set
pub const DEFAULT_TEST: &str = "*";

/// Default search depth below the source root
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Directory `--source` is resolved against
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Directory the destination is resolved against
pub const DEFAULT_BUILD_ROOT: &str = "build";
