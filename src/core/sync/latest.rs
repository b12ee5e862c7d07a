//! Destructive refresh workflows, gated on confirmation.

use std::path::Path;

use tracing::info;

use super::{target, Orchestrator};
use crate::core::catalog;
use crate::core::confirm::Confirm;
use crate::core::domain::{Outcome, Report};
use crate::core::git::{self, GitStep};
use crate::core::runner::Runner;
use crate::error::Result;

impl<R: Runner> Orchestrator<'_, R> {
    /// Discard local work in every cataloged repository and bring it up to
    /// date with its remote.
    ///
    /// Per repository: `git clean -fdx` when `clean` is set, otherwise
    /// `git reset --hard`; then fetch, checkout and pull. The branch is
    /// `branch` when given, else the repository's default branch.
    ///
    /// Nothing runs unless `confirm` says yes.
    pub fn get_latest(
        &self,
        confirm: &dyn Confirm,
        branch: Option<&str>,
        clean: bool,
    ) -> Result<Outcome> {
        let branch = branch.map(str::trim).filter(|b| !b.is_empty());
        if let Some(branch) = branch {
            git::ref_name("branch", branch)?;
        }
        let repositories = catalog::repositories(self.storage)?;
        self.runner.check(self.program())?;

        if !confirm.confirm("All your local changes will be lost. Do you want to proceed?")? {
            info!("get-latest cancelled");
            return Ok(Outcome::Cancelled);
        }

        info!(
            repositories = repositories.len(),
            branch = branch.unwrap_or("<default>"),
            clean,
            "getting latest"
        );

        let mut report = Report::default();
        for repo in repositories {
            let discard = if clean {
                GitStep::Clean
            } else {
                GitStep::ResetHard
            };
            let checkout = branch.unwrap_or(repo.default_branch.as_str()).to_string();
            let steps = [
                discard,
                GitStep::Fetch,
                GitStep::Checkout(checkout),
                GitStep::Pull,
            ];
            report.push(self.run_in(&repo.name, &repo.working_folder, &steps));
        }

        Ok(Outcome::Completed(report))
    }

    /// Hard-reset the shared service below `base` and sync it to its
    /// configured branch.
    ///
    /// Nothing runs unless `confirm` says yes.
    pub fn sync_shared_service(&self, confirm: &dyn Confirm, base: &Path) -> Result<Outcome> {
        self.runner.check(self.program())?;

        let (name, folder) = target(self.settings.shared_service_dir(base));
        let prompt = format!(
            "All your {} changes will be lost. Do you want to proceed?",
            name
        );
        if !confirm.confirm(&prompt)? {
            info!("shared service sync cancelled");
            return Ok(Outcome::Cancelled);
        }

        info!(folder = %folder.display(), "syncing shared service");
        let steps = [
            GitStep::ResetHard,
            GitStep::Fetch,
            GitStep::Checkout(self.settings.shared_service.branch.clone()),
            GitStep::Pull,
        ];

        let mut report = Report::default();
        report.push(self.run_in(&name, &folder, &steps));
        Ok(Outcome::Completed(report))
    }
}
