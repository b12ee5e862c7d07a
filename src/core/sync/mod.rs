//! Multi-repository git orchestration.
//!
//! Every workflow follows the same shape: an optional confirmation gate,
//! then for each target repository an ordered list of git steps. Steps of
//! one repository stop at the first failure; the batch always moves on to
//! the next repository. Commands run one at a time, in catalog order.

mod branch;
mod clone;
mod latest;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::config::Settings;
use crate::core::domain::{RepoResult, StepFailure};
use crate::core::git::GitStep;
use crate::core::runner::Runner;
use crate::core::storage::Storage;
use crate::error::CatalogError;

/// Sequences git workflows over the repository catalog.
pub struct Orchestrator<'a, R> {
    storage: &'a Storage,
    runner: R,
    settings: &'a Settings,
}

impl<'a, R: Runner> Orchestrator<'a, R> {
    pub fn new(storage: &'a Storage, runner: R, settings: &'a Settings) -> Self {
        Self {
            storage,
            runner,
            settings,
        }
    }

    fn program(&self) -> &str {
        &self.settings.git.program
    }

    /// Run `steps` inside `folder`, stopping at the first failure.
    ///
    /// A missing folder fails the repository before any command is issued.
    fn run_in(&self, name: &str, folder: &Path, steps: &[GitStep]) -> RepoResult {
        let mut result = RepoResult {
            name: name.to_string(),
            folder: folder.to_path_buf(),
            completed: Vec::new(),
            failure: None,
        };

        if !folder.is_dir() {
            warn!(repository = name, folder = %folder.display(), "working folder missing");
            result.failure = Some(StepFailure {
                step: format!("cd {}", folder.display()),
                error: CatalogError::MissingWorkingFolder(folder.to_path_buf()).into(),
            });
            return result;
        }

        self.run_steps(&mut result, Some(folder), steps);
        result
    }

    /// Run `steps` with an optional working directory, recording progress
    /// into `result`.
    fn run_steps(&self, result: &mut RepoResult, dir: Option<&Path>, steps: &[GitStep]) {
        for step in steps {
            debug!(repository = %result.name, step = %step, "running step");
            let invocation = step.invocation(self.program(), dir);
            match self.runner.run(&invocation) {
                Ok(()) => result.completed.push(step.to_string()),
                Err(error) => {
                    warn!(repository = %result.name, step = %step, %error, "step failed");
                    result.failure = Some(StepFailure {
                        step: step.to_string(),
                        error,
                    });
                    return;
                }
            }
        }
    }
}

/// Display name for a folder-addressed target.
fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| folder.display().to_string())
}

/// Targets for workflows addressed by folder rather than catalog name.
fn target(folder: PathBuf) -> (String, PathBuf) {
    (folder_name(&folder), folder)
}
