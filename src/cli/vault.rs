//! Vault commands.

use tracing::info;

use crate::cli::output;
use crate::core::vault::Vault;
use crate::error::Result;

/// Create a secret.
pub fn create(key: &str, value: &str) -> Result<()> {
    info!("Creating secret: {}", key);

    let vault = Vault::open()?;
    let secret = vault.create(key, value)?;

    output::success(&format!("created {}", output::key(secret.key())));
    output::kv("stored:", secret.preview());
    Ok(())
}

/// Print a decrypted secret.
pub fn get(key: &str) -> Result<()> {
    let vault = Vault::open()?;
    let value = vault.get(key)?;
    println!("{}", value.as_str());
    Ok(())
}

/// Update a secret.
pub fn update(key: &str, value: &str) -> Result<()> {
    info!("Updating secret: {}", key);

    let vault = Vault::open()?;
    let secret = vault.update(key, value)?;

    output::success(&format!("updated {}", output::key(secret.key())));
    output::kv("stored:", secret.preview());
    Ok(())
}

/// Delete a secret.
pub fn rm(key: &str) -> Result<()> {
    let vault = Vault::open()?;
    vault.remove(key)?;
    output::success(&format!("removed {}", output::key(key)));
    Ok(())
}

/// List secret keys.
pub fn list(json: bool) -> Result<()> {
    let vault = Vault::open()?;
    let keys = vault.keys()?;

    if json {
        return output::json(&keys);
    }

    if keys.is_empty() {
        output::dimmed("no secrets stored");
        output::hint("devex vault create --key <KEY> --value <VALUE>");
        return Ok(());
    }

    output::header(&format!("{} secrets", keys.len()));
    for key in &keys {
        output::list_item(key);
    }
    Ok(())
}
