//! Error types.
//!
//! One enum per concern, aggregated into [`Error`]. Handlers return the
//! crate-level [`Result`] so `?` works across layers.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Bad or missing user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("value for {0} cannot be empty")]
    EmptyValue(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} cannot start with '-': {value}")]
    OptionLike { field: &'static str, value: String },
}

/// Vault entry errors.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("secret not found: {key}{}", format_suggestions(.suggestions))]
    NotFound {
        key: String,
        suggestions: Vec<String>,
    },

    #[error("secret already exists: {0} (use `vault update` to change it)")]
    AlreadyExists(String),
}

impl VaultError {
    /// Build a `NotFound` error, suggesting keys that share a prefix or
    /// substring with the requested one.
    pub fn not_found_with_suggestions(key: String, available: &[String]) -> Self {
        let needle = key.to_lowercase();
        let suggestions = available
            .iter()
            .filter(|k| {
                let candidate = k.to_lowercase();
                candidate.contains(&needle) || needle.contains(&candidate)
            })
            .take(3)
            .cloned()
            .collect();
        VaultError::NotFound { key, suggestions }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Repository catalog and bookmark errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("repository already cataloged: {0}")]
    DuplicateRepository(String),

    #[error("bookmark not found: {0}")]
    BookmarkNotFound(String),

    #[error("working folder does not exist: {}", .0.display())]
    MissingWorkingFolder(PathBuf),
}

/// Persistence layer errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("unable to determine home directory (set DEVEX_HOME)")]
    NoHome,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("storage file {path} has version {found}, newer than supported {supported}")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize storage: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Encryption and key material errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor failed: {0}")]
    ArmorFailed(String),

    #[error("invalid identity file {path}: {reason}")]
    InvalidIdentity { path: PathBuf, reason: String },

    #[error("failed to access key material at {path}: {source}")]
    KeyAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// External command errors.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{program} not found on PATH")]
    NotFound { program: String },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}", format_code(.code))]
    Failed { command: String, code: Option<i32> },
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
