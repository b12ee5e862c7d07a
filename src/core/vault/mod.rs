//! Vault command handlers.
//!
//! Create, read, update and delete secrets in the user storage document.
//! Values are encrypted before they reach the document and decrypted only
//! on explicit read. Each mutating handler performs exactly one load and
//! one save.

mod secrets;

use tracing::debug;

use crate::core::cipher::{Age, Cipher};
use crate::core::storage::Storage;
use crate::error::{Result, ValidationError};

/// Secret handlers over a storage manager and a cipher.
pub struct Vault<C = Age> {
    storage: Storage,
    cipher: C,
}

impl Vault<Age> {
    /// Open the vault in the default data directory, creating the machine
    /// identity on first use.
    pub fn open() -> Result<Self> {
        let storage = Storage::open_default()?;
        let cipher = Age::open(storage.dir())?;
        Ok(Self::new(storage, cipher))
    }
}

impl<C: Cipher> Vault<C> {
    /// Build a vault from explicit parts.
    pub fn new(storage: Storage, cipher: C) -> Self {
        debug!(backend = cipher.name(), dir = %storage.dir().display(), "vault opened");
        Self { storage, cipher }
    }

    /// Underlying storage manager.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

/// Reject blank keys.
fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }
    Ok(())
}

/// Reject blank values.
fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyValue(key.to_string()).into());
    }
    Ok(())
}
