//! User settings.
//!
//! Reads the optional `config.toml` next to the storage document. Every
//! field has a default, so a missing file or a partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub git: GitSettings,
    pub shared_service: SharedServiceSettings,
}

/// How git is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Executable name or path.
    pub program: String,
    /// Remote used when pushing new branches upstream.
    pub remote: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: "origin".to_string(),
        }
    }
}

/// The auxiliary repository checked out inside a primary working folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedServiceSettings {
    /// Folder relative to the primary repository.
    pub folder: PathBuf,
    /// Branch the shared service is synced to.
    pub branch: String,
}

impl Default for SharedServiceSettings {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("shared-service"),
            branch: "develop".to_string(),
        }
    }
}

impl Settings {
    /// Path of the settings file inside `dir`.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(constants::CONFIG_FILE)
    }

    /// Load settings from `dir`, falling back to defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be used.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path(dir);
        debug!(path = %path.display(), "loading settings");

        if !path.exists() {
            debug!("settings file absent, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            program = %settings.git.program,
            shared_service = %settings.shared_service.folder.display(),
            "settings loaded"
        );
        Ok(settings)
    }

    /// Folder of the shared service below `base`.
    pub fn shared_service_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.shared_service.folder)
    }
}
