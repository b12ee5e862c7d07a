//! Cryptographic operations.
//!
//! Vault values are encrypted one at a time and bound to the machine
//! identity. The default backend is age (x25519, ASCII armor).
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;

mod age;

pub use self::age::Age;

/// Cryptographic backend trait.
///
/// Implementations own their key material; callers only see strings.
/// Neither method may log or persist plaintext.
pub trait Cipher {
    /// Encrypt a single plaintext value.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key material is unusable or encryption
    /// fails.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypt a value previously produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError` on malformed ciphertext or a key mismatch (for
    /// example a storage file copied from another machine).
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

impl<C: Cipher + ?Sized> Cipher for &C {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        (**self).decrypt(ciphertext)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
