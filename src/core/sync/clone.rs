//! Clone workflows. Cloning is additive, so neither variant asks for
//! confirmation.

use std::fs;
use std::path::Path;

use tracing::info;

use super::Orchestrator;
use crate::core::catalog;
use crate::core::domain::{RepoResult, Report, StepFailure};
use crate::core::git::GitStep;
use crate::core::runner::Runner;
use crate::error::Result;

impl<R: Runner> Orchestrator<'_, R> {
    /// Clone every cataloged repository into its working folder at its
    /// default branch.
    ///
    /// Each repository is independent: a failure is recorded and the batch
    /// continues. Already cloned repositories are never rolled back.
    ///
    /// # Errors
    ///
    /// Fails before doing anything if the catalog cannot be loaded or git is
    /// not installed.
    pub fn clone_all(&self) -> Result<Report> {
        let repositories = catalog::repositories(self.storage)?;
        self.runner.check(self.program())?;
        info!(repositories = repositories.len(), "cloning all repositories");

        let mut report = Report::default();
        for repo in repositories {
            let mut result = RepoResult {
                name: repo.name.clone(),
                folder: repo.working_folder.clone(),
                completed: Vec::new(),
                failure: None,
            };

            if let Err(e) = ensure_folder(&repo.working_folder) {
                result.failure = Some(StepFailure {
                    step: format!("mkdir {}", repo.working_folder.display()),
                    error: e.into(),
                });
                report.push(result);
                continue;
            }

            let step = GitStep::Clone {
                remote: repo.remote_location.clone(),
                branch: Some(repo.default_branch.clone()),
                destination: repo.working_folder.clone(),
            };
            self.run_steps(&mut result, None, &[step]);
            report.push(result);
        }

        Ok(report)
    }

    /// Clone one cataloged repository, with full history, into `target`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::RepositoryNotFound` for an unknown name and
    /// `CommandError` if the clone fails.
    pub fn clone_one(&self, name: &str, target: &Path) -> Result<()> {
        let repo = catalog::resolve(self.storage, name)?;
        self.runner.check(self.program())?;

        ensure_folder(target)?;
        info!(repository = name, target = %target.display(), "cloning repository");

        let step = GitStep::Clone {
            remote: repo.remote_location,
            branch: None,
            destination: target.to_path_buf(),
        };
        self.runner.run(&step.invocation(self.program(), None))
    }
}

fn ensure_folder(folder: &Path) -> std::io::Result<()> {
    if !folder.exists() {
        fs::create_dir_all(folder)?;
    }
    Ok(())
}
