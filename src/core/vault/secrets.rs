//! Secret operations.

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{validate_key, validate_value, Vault};
use crate::core::cipher::Cipher;
use crate::core::domain::Secret;
use crate::core::types::SecretKey;
use crate::error::{Result, VaultError};

impl<C: Cipher> Vault<C> {
    /// Create a secret.
    ///
    /// Strict insert: an existing key is never overwritten here, use
    /// [`Vault::update`] for that.
    ///
    /// # Returns
    ///
    /// The stored secret, carrying its ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if key or value is blank and
    /// `VaultError::AlreadyExists` if the key is taken.
    pub fn create(&self, key: &str, value: &str) -> Result<Secret> {
        validate_key(key)?;
        validate_value(key, value)?;
        info!(key, "creating secret");

        let mut doc = self.storage.load()?;
        if doc.vault.contains_key(key) {
            return Err(VaultError::AlreadyExists(key.to_string()).into());
        }

        let encrypted = self.cipher.encrypt(value)?;
        doc.vault.insert(key.to_string(), encrypted.clone());
        self.storage.save(&doc)?;

        Ok(Secret::new(key.to_string(), encrypted))
    }

    /// Read and decrypt a secret.
    ///
    /// # Returns
    ///
    /// The plaintext wrapped in `Zeroizing` for secure memory cleanup.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if the key doesn't exist and
    /// `CipherError` if decryption fails.
    pub fn get(&self, key: &str) -> Result<Zeroizing<String>> {
        validate_key(key)?;
        debug!(key, "reading secret");

        let doc = self.storage.load()?;
        let encrypted = doc.vault.get(key).ok_or_else(|| {
            let available: Vec<String> = doc.vault.keys().cloned().collect();
            VaultError::not_found_with_suggestions(key.to_string(), &available)
        })?;

        Ok(Zeroizing::new(self.cipher.decrypt(encrypted)?))
    }

    /// Re-encrypt and overwrite an existing secret.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if the key doesn't exist.
    pub fn update(&self, key: &str, value: &str) -> Result<Secret> {
        validate_key(key)?;
        validate_value(key, value)?;
        info!(key, "updating secret");

        let mut doc = self.storage.load()?;
        let available: Vec<String> = doc.vault.keys().cloned().collect();
        let slot = doc
            .vault
            .get_mut(key)
            .ok_or_else(|| VaultError::not_found_with_suggestions(key.to_string(), &available))?;

        let encrypted = self.cipher.encrypt(value)?;
        *slot = encrypted.clone();
        self.storage.save(&doc)?;

        Ok(Secret::new(key.to_string(), encrypted))
    }

    /// Remove a secret.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if the key doesn't exist.
    pub fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        info!(key, "removing secret");

        let mut doc = self.storage.load()?;
        if doc.vault.remove(key).is_none() {
            let available: Vec<String> = doc.vault.keys().cloned().collect();
            return Err(VaultError::not_found_with_suggestions(key.to_string(), &available).into());
        }
        self.storage.save(&doc)?;
        Ok(())
    }

    /// All secret keys, sorted. Nothing is decrypted.
    pub fn keys(&self) -> Result<Vec<SecretKey>> {
        let doc = self.storage.load()?;
        Ok(doc.vault.keys().cloned().collect())
    }
}
