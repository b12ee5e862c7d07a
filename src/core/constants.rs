//! Constants used throughout devex.
//!
//! Centralizes file names, environment variables and schema values.

/// Data directory relative to HOME (~/.devex).
pub const DATA_DIR: &str = ".devex";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "DEVEX_HOME";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "DEVEX_LOG";

/// User storage document file name.
pub const STORAGE_FILE: &str = "storage.toml";

/// Optional settings file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Machine identity (age private key) file name.
pub const IDENTITY_FILE: &str = "identity.key";

/// Current storage schema version.
///
/// - 0: legacy documents without a version field
/// - 1: vault, applications, repositories, bookmarks
/// - 2: application launch arguments
pub const SCHEMA_VERSION: u32 = 2;

/// Unix permission mode for files holding secrets or key material.
pub const PRIVATE_FILE_MODE: u32 = 0o600;
