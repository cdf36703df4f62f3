//! Application identity and built-in defaults.
//!
//! Single source of truth for the app name, version, and the values used when
//! neither a flag nor an environment variable overrides them.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory traversed when `--root` is not given.
pub const DEFAULT_ROOT: &str = ".";

/// Output file written when neither `--output` nor `PATHS_ONLY_OUTPUT` is set.
pub const DEFAULT_OUTPUT: &str = "file_paths.txt";

/// Environment variable overriding the output file.
pub const ENV_OUTPUT: &str = "PATHS_ONLY_OUTPUT";

/// Environment variable with comma-separated extra directory names to exclude.
pub const ENV_EXCLUDE: &str = "PATHS_ONLY_EXCLUDE";
