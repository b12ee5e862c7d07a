//! Storage document types.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::constants;
use crate::core::types::{BranchName, EncryptedValue, RepoName, SecretKey};

/// The single persisted aggregate.
///
/// Every field defaults so documents written by older versions load with
/// empty containers for anything they lack. Plain values are declared
/// before tables to keep the TOML layout stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStorage {
    /// Schema version, see [`constants::SCHEMA_VERSION`].
    #[serde(default)]
    pub version: u32,
    /// Bookmarked paths and URLs.
    #[serde(default)]
    pub bookmarks: Vec<String>,
    /// Vault key to ciphertext.
    #[serde(default)]
    pub vault: BTreeMap<SecretKey, EncryptedValue>,
    /// Registered applications.
    #[serde(default)]
    pub applications: Vec<Application>,
    /// Repository catalog.
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

impl UserStorage {
    /// Create an empty document at the current schema version.
    pub fn new() -> Self {
        Self {
            version: constants::SCHEMA_VERSION,
            bookmarks: Vec::new(),
            vault: BTreeMap::new(),
            applications: Vec::new(),
            repositories: Vec::new(),
        }
    }

    /// Look up a repository by name.
    ///
    /// Returns the first match. Duplicate names indicate a hand-edited or
    /// corrupted catalog and are logged rather than rejected.
    pub fn repository(&self, name: &str) -> Option<&Repository> {
        let mut matches = self.repositories.iter().filter(|r| r.name == name);
        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            warn!(repository = name, "duplicate repository name in catalog, using first entry");
        }
        first
    }

    /// Names that appear more than once in the catalog.
    pub fn duplicate_repositories(&self) -> Vec<&str> {
        let mut seen = std::collections::BTreeSet::new();
        let mut duplicates = Vec::new();
        for repo in &self.repositories {
            if !seen.insert(repo.name.as_str()) && !duplicates.contains(&repo.name.as_str()) {
                duplicates.push(repo.name.as_str());
            }
        }
        duplicates
    }
}

impl Default for UserStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// A cataloged source repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: RepoName,
    pub remote_location: String,
    pub default_branch: BranchName,
    pub working_folder: PathBuf,
}

impl Repository {
    pub fn new(
        name: impl Into<RepoName>,
        remote_location: impl Into<String>,
        default_branch: impl Into<BranchName>,
        working_folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            remote_location: remote_location.into(),
            default_branch: default_branch.into(),
            working_folder: working_folder.into(),
        }
    }
}

/// A registered application with its launch metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub path: PathBuf,
    /// Added in schema version 2.
    #[serde(default)]
    pub arguments: Vec<String>,
}
