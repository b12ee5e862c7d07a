//! Secret type.
//!
//! A vault entry as handed back to callers: the key and its ciphertext.
//! Plaintext never lives in this type.

use crate::core::types::{EncryptedValue, SecretKey};

/// Number of ciphertext body characters shown by [`Secret::preview`].
const PREVIEW_LEN: usize = 16;

/// An encrypted vault entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Secret {
    key: SecretKey,
    value: EncryptedValue,
}

impl Secret {
    pub fn new(key: SecretKey, value: EncryptedValue) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Full ciphertext as stored.
    pub fn encrypted(&self) -> &str {
        &self.value
    }

    /// Short excerpt of the ciphertext body, skipping armor header lines.
    pub fn preview(&self) -> String {
        let body: String = self
            .value
            .lines()
            .filter(|l| !l.starts_with("-----"))
            .collect();
        let mut preview: String = body.chars().take(PREVIEW_LEN).collect();
        if body.chars().count() > PREVIEW_LEN {
            preview.push('…');
        }
        preview
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
