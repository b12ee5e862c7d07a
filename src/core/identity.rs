//! Machine identity.
//!
//! Wraps the per-user age private key that binds vault ciphertext to this
//! machine. The key lives next to the storage document in `identity.key`.

use std::fs;
use std::path::{Path, PathBuf};

use age::secrecy::ExposeSecret;
use age::x25519;
use tracing::{debug, warn};

use crate::core::constants;
use crate::error::{CipherError, Result};

/// A private key identity for encrypting and decrypting vault values.
pub struct Identity {
    inner: x25519::Identity,
    path: PathBuf,
}

impl Identity {
    /// Load the identity from `dir`, generating it on first use.
    pub fn load_or_generate(dir: &Path) -> Result<Self> {
        if dir.join(constants::IDENTITY_FILE).exists() {
            Self::load(dir)
        } else {
            Self::generate(dir)
        }
    }

    /// Load an existing identity from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::KeyAccess` if the key file cannot be read and
    /// `CipherError::InvalidIdentity` if its contents are not an age key.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(constants::IDENTITY_FILE);
        debug!("Loading identity from: {}", path.display());

        #[cfg(unix)]
        {
            if let Err(e) = check_permissions(&path) {
                warn!(
                    "Insecure key file permissions: {}. Run: chmod 600 {}",
                    e,
                    path.display()
                );
            }
        }

        let contents = fs::read_to_string(&path).map_err(|source| CipherError::KeyAccess {
            path: path.clone(),
            source,
        })?;

        let inner: x25519::Identity =
            contents
                .trim()
                .parse()
                .map_err(|e: &str| CipherError::InvalidIdentity {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;

        Ok(Self { inner, path })
    }

    /// Generate a new identity and write it to `dir` with owner-only access.
    pub fn generate(dir: &Path) -> Result<Self> {
        debug!("Generating new identity in: {}", dir.display());

        let path = dir.join(constants::IDENTITY_FILE);
        let key_access = |source| CipherError::KeyAccess {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(key_access)?;

        let inner = x25519::Identity::generate();
        let secret = inner.to_string();
        fs::write(&path, format!("{}\n", secret.expose_secret())).map_err(key_access)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(
                &path,
                fs::Permissions::from_mode(constants::PRIVATE_FILE_MODE),
            )
            .map_err(key_access)?;
        }

        debug!("Identity generated and saved to: {}", path.display());

        Ok(Self { inner, path })
    }

    /// Public half of the identity, used as the sole encryption recipient.
    pub fn recipient(&self) -> x25519::Recipient {
        self.inner.to_public()
    }

    /// Inner age identity (for decryption).
    pub fn as_age(&self) -> &x25519::Identity {
        &self.inner
    }

    /// Key file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("recipient", &self.recipient().to_string())
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(unix)]
fn check_permissions(path: &Path) -> std::result::Result<(), String> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)
        .map_err(|e| e.to_string())?
        .permissions()
        .mode()
        & 0o777;

    if mode != constants::PRIVATE_FILE_MODE {
        return Err(format!(
            "expected {:o}, found {:o}",
            constants::PRIVATE_FILE_MODE,
            mode
        ));
    }
    Ok(())
}
