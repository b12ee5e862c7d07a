//! Branch creation and profile configuration.

use std::path::Path;

use tracing::info;

use super::{target, Orchestrator};
use crate::core::catalog;
use crate::core::domain::Report;
use crate::core::git::{self, GitStep};
use crate::core::runner::Runner;
use crate::error::{Result, ValidationError};

impl<R: Runner> Orchestrator<'_, R> {
    /// Create branch `issue_id` in the primary repository at `base` and in
    /// the shared service below it, check it out and push it upstream.
    ///
    /// The two repositories are independent: a push rejected in one (for
    /// example because the branch already exists remotely) does not stop
    /// the other.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for a blank issue id and
    /// `ValidationError::OptionLike` for one starting with `-`.
    pub fn create_branch(&self, base: &Path, issue_id: &str) -> Result<Report> {
        let issue_id = issue_id.trim();
        if issue_id.is_empty() {
            return Err(ValidationError::EmptyField("issue id").into());
        }
        git::ref_name("issue id", issue_id)?;
        self.runner.check(self.program())?;
        info!(branch = issue_id, base = %base.display(), "creating branch");

        let targets = [
            target(base.to_path_buf()),
            target(self.settings.shared_service_dir(base)),
        ];

        let steps = [
            GitStep::Branch(issue_id.to_string()),
            GitStep::Checkout(issue_id.to_string()),
            GitStep::PushUpstream {
                remote: self.settings.git.remote.clone(),
                branch: issue_id.to_string(),
            },
        ];

        let mut report = Report::default();
        for (name, folder) in targets {
            report.push(self.run_in(&name, &folder, &steps));
        }
        Ok(report)
    }

    /// Set the git user name and email globally and in every cataloged
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for blank values and
    /// `CommandError` if the global configuration cannot be written. Local
    /// failures are reported per repository.
    pub fn configure_profile(&self, user_name: &str, email: &str) -> Result<Report> {
        let user_name = user_name.trim();
        let email = email.trim();
        if user_name.is_empty() {
            return Err(ValidationError::EmptyField("user name").into());
        }
        if email.is_empty() {
            return Err(ValidationError::EmptyField("email").into());
        }

        let repositories = catalog::repositories(self.storage)?;
        self.runner.check(self.program())?;
        info!(repositories = repositories.len(), "configuring git profile");

        let profile = |global: bool| {
            [
                GitStep::Config {
                    global,
                    key: "user.name".to_string(),
                    value: user_name.to_string(),
                },
                GitStep::Config {
                    global,
                    key: "user.email".to_string(),
                    value: email.to_string(),
                },
            ]
        };

        for step in profile(true) {
            self.runner.run(&step.invocation(self.program(), None))?;
        }

        let local = profile(false);
        let mut report = Report::default();
        for repo in repositories {
            report.push(self.run_in(&repo.name, &repo.working_folder, &local));
        }
        Ok(report)
    }
}
