//! User storage management.
//!
//! [`Storage`] is the sole owner of on-disk state: a single TOML document
//! holding the vault, the repository catalog, applications and bookmarks.
//! Every handler loads the whole document, mutates it in memory and saves
//! it back whole.
//!
//! There is no cross-process locking. Two concurrent invocations racing on
//! the same file resolve as last writer wins.

mod migrate;
mod model;

use std::cell::Cell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::constants;
use crate::error::{Result, StorageError};

pub use model::{Application, Repository, UserStorage};

/// Resolve the data directory: `$DEVEX_HOME`, else `~/.devex`.
///
/// # Errors
///
/// Returns `StorageError::NoHome` if neither is available.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(constants::HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(StorageError::NoHome)?;
    Ok(home.join(constants::DATA_DIR))
}

/// Storage manager rooted at a data directory.
#[derive(Debug)]
pub struct Storage {
    dir: PathBuf,
    migrated_from: Cell<Option<u32>>,
}

impl Storage {
    /// Storage rooted at the default data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::at(data_dir()?))
    }

    /// Storage rooted at `dir`. Nothing is touched until the first save.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            migrated_from: Cell::new(None),
        }
    }

    /// Data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the storage document.
    pub fn path(&self) -> PathBuf {
        self.dir.join(constants::STORAGE_FILE)
    }

    /// Load the user storage document.
    ///
    /// A missing file yields a fresh, empty document that is not written
    /// until [`Storage::save`]. Older schema versions are migrated forward.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` for malformed content and
    /// `StorageError::UnsupportedVersion` for documents written by a newer
    /// release.
    pub fn load(&self) -> Result<UserStorage> {
        let path = self.path();
        debug!(path = %path.display(), "loading storage");

        if !path.exists() {
            debug!("storage file absent, starting empty");
            return Ok(UserStorage::new());
        }

        let contents = fs::read_to_string(&path).map_err(|source| StorageError::Read {
            path: path.clone(),
            source,
        })?;

        let mut doc: UserStorage =
            toml::from_str(&contents).map_err(|e| StorageError::Corrupt {
                path: path.clone(),
                reason: e.message().to_string(),
            })?;

        if doc.version > constants::SCHEMA_VERSION {
            return Err(StorageError::UnsupportedVersion {
                path,
                found: doc.version,
                supported: constants::SCHEMA_VERSION,
            }
            .into());
        }

        if let Some(from) = migrate::migrate(&mut doc) {
            self.migrated_from.set(Some(from));
        }

        for name in doc.duplicate_repositories() {
            warn!(repository = name, "repository name is not unique in catalog");
        }

        debug!(
            secrets = doc.vault.len(),
            repositories = doc.repositories.len(),
            applications = doc.applications.len(),
            bookmarks = doc.bookmarks.len(),
            "storage loaded"
        );

        Ok(doc)
    }

    /// Persist the whole document.
    ///
    /// The document is written to a sibling temporary file which is then
    /// renamed over the target, so the previous version survives any
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Write` on I/O failure.
    pub fn save(&self, doc: &UserStorage) -> Result<()> {
        let path = self.path();
        debug!(path = %path.display(), "saving storage");

        let contents = toml::to_string_pretty(doc).map_err(StorageError::Serialize)?;

        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })?;

        // Cleared only once the backup exists, so a failed copy is retried.
        if let Some(from) = self.migrated_from.get() {
            self.backup(&path, from)?;
            self.migrated_from.set(None);
        }

        // Per-process name so concurrent writers never share a temp file.
        let tmp = self
            .dir
            .join(format!("{}.{}.tmp", constants::STORAGE_FILE, std::process::id()));
        if let Err(source) = write_private(&tmp, contents.as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Write { path: tmp, source }.into());
        }

        fs::rename(&tmp, &path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StorageError::Write {
                path: path.clone(),
                source,
            }
        })?;

        debug!("storage saved");
        Ok(())
    }

    /// Copy the pre-migration file aside before it is first overwritten.
    fn backup(&self, path: &Path, from: u32) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let backup = self.backup_path(from, chrono::Utc::now());
        fs::copy(path, &backup).map_err(|source| StorageError::Write {
            path: backup.clone(),
            source,
        })?;
        debug!(backup = %backup.display(), "backed up pre-migration storage");
        Ok(())
    }
}

impl Storage {
    fn backup_path(&self, from: u32, at: chrono::DateTime<chrono::Utc>) -> PathBuf {
        self.dir.join(format!(
            "{}.v{}-{}.bak",
            constants::STORAGE_FILE,
            from,
            at.format("%Y%m%d_%H%M%S")
        ))
    }
}

/// Write `bytes` to a fresh file readable only by the owner, flushed to disk.
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(constants::PRIVATE_FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
