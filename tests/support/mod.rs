//! Test support utilities for devex integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and its own data dir, passed to the
/// binary through `DEVEX_HOME`. No process-global state is mutated, so
/// tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
    /// Temporary data directory (`DEVEX_HOME`)
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with secrets already in the vault.
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (k, v) in secrets {
            let output = t.create(k, v);
            assert!(
                output.status.success(),
                "Failed to create secret {}: {}",
                k,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of the storage document.
    pub fn storage_path(&self) -> PathBuf {
        self.home.path().join("storage.toml")
    }

    /// Raw contents of the storage document.
    pub fn storage_contents(&self) -> String {
        std::fs::read_to_string(self.storage_path()).expect("failed to read storage.toml")
    }

    /// Write `config.toml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.home.path().join("config.toml"), contents)
            .expect("failed to write config.toml");
    }
}
