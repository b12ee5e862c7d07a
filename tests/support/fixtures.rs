//! Test fixtures and constants.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use devex::core::catalog;
use devex::core::runner::{Invocation, Runner};
use devex::core::storage::{Repository, Storage};
use devex::error::{CommandError, Result};

/// Standard test secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("api_token", "abc123"),
    ("db_password", "hunter2"),
    ("deploy_key", "ssh-ed25519 AAAAC3Nza"),
];

/// A catalog entry whose working folder lives under `root`.
pub fn repo(root: &Path, name: &str) -> Repository {
    Repository::new(
        name,
        format!("git@example.com:org/{}.git", name),
        "main",
        root.join("work").join(name),
    )
}

/// Catalog `names` in order and create each working folder.
pub fn catalog_with_folders(storage: &Storage, root: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let entry = repo(root, name);
            std::fs::create_dir_all(&entry.working_folder).expect("failed to create folder");
            let folder = entry.working_folder.clone();
            catalog::add(storage, entry).expect("failed to catalog repository");
            folder
        })
        .collect()
}

/// Runner that records invocations instead of spawning processes.
///
/// Commands succeed unless a failure rule matches: the git subcommand
/// equals the rule's subcommand and the target folder ends with the rule's
/// folder name.
#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    failures: Vec<(String, String)>,
    missing: bool,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `subcommand` when it targets folder `folder`.
    pub fn failing(mut self, folder: &str, subcommand: &str) -> Self {
        self.failures
            .push((folder.to_string(), subcommand.to_string()));
        self
    }

    /// Behave as if the program were not installed.
    pub fn without_program(mut self) -> Self {
        self.missing = true;
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Recorded command lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.command_line()).collect()
    }

    /// Recorded command lines that ran inside `folder`.
    pub fn lines_in(&self, folder: &Path) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.working_dir() == Some(folder))
            .map(|c| c.command_line())
            .collect()
    }

    fn target(invocation: &Invocation) -> Option<PathBuf> {
        match invocation.working_dir() {
            Some(dir) => Some(dir.to_path_buf()),
            None if invocation.arguments().first().map(String::as_str) == Some("clone") => {
                invocation.arguments().last().map(PathBuf::from)
            }
            None => None,
        }
    }
}

impl Runner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.calls.borrow_mut().push(invocation.clone());

        let subcommand = invocation.arguments().first().cloned().unwrap_or_default();
        let target = Self::target(invocation);
        let fails = self.failures.iter().any(|(folder, sub)| {
            *sub == subcommand && target.as_deref().is_some_and(|t| t.ends_with(folder))
        });

        if fails {
            return Err(CommandError::Failed {
                command: invocation.command_line(),
                code: Some(1),
            }
            .into());
        }
        Ok(())
    }

    fn check(&self, program: &str) -> Result<()> {
        if self.missing {
            return Err(CommandError::NotFound {
                program: program.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
