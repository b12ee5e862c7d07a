//! Git workflow commands.
//!
//! Each command builds an [`Orchestrator`] over the default storage and
//! prints its per-repository report. A batch with any failed repository
//! exits non-zero.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::confirm::Confirm;
use crate::core::domain::{Outcome, Report};
use crate::core::runner::SystemRunner;
use crate::core::storage::Storage;
use crate::core::sync::Orchestrator;
use crate::error::{Error, Result};

fn with_orchestrator<T>(f: impl FnOnce(&Orchestrator<'_, SystemRunner>) -> Result<T>) -> Result<T> {
    let storage = Storage::open_default()?;
    let settings = Settings::load(storage.dir())?;
    let orchestrator = Orchestrator::new(&storage, SystemRunner, &settings);
    f(&orchestrator)
}

/// Clone every cataloged repository.
pub fn clone_all() -> Result<()> {
    let report = with_orchestrator(|o| o.clone_all())?;
    finish(&report, "cloned")
}

/// Clone one repository into `folder`.
pub fn clone_one(name: &str, folder: &Path) -> Result<()> {
    with_orchestrator(|o| o.clone_one(name, folder))?;
    output::success(&format!(
        "cloned {} into {}",
        output::key(name),
        output::path(folder.display())
    ));
    Ok(())
}

/// Discard local changes and pull the latest everywhere.
pub fn latest(confirm: &dyn Confirm, branch: Option<&str>, clean: bool) -> Result<()> {
    let outcome = with_orchestrator(|o| o.get_latest(confirm, branch, clean))?;
    finish_outcome(outcome, "up to date")
}

/// Create and push an issue branch.
pub fn branch(base: &Path, issue: &str) -> Result<()> {
    let report = with_orchestrator(|o| o.create_branch(base, issue))?;
    finish(&report, &format!("on {}", issue.trim()))
}

/// Sync the shared service.
pub fn sync_shared(confirm: &dyn Confirm, base: &Path) -> Result<()> {
    let outcome = with_orchestrator(|o| o.sync_shared_service(confirm, base))?;
    finish_outcome(outcome, "synced")
}

/// Configure the git profile globally and per repository.
pub fn profile(name: Option<String>, email: &str) -> Result<()> {
    let name = name.unwrap_or_else(whoami::realname);
    let report = with_orchestrator(|o| o.configure_profile(&name, email))?;
    output::success(&format!("global profile set to {} <{}>", name.trim(), email.trim()));
    finish(&report, "configured")
}

fn finish_outcome(outcome: Outcome, verb: &str) -> Result<()> {
    match outcome {
        Outcome::Cancelled => {
            output::warn("operation cancelled, nothing was changed");
            Ok(())
        }
        Outcome::Completed(report) => finish(&report, verb),
    }
}

fn finish(report: &Report, verb: &str) -> Result<()> {
    print_report(report, verb);

    let failed = report.failed().count();
    if failed > 0 {
        return Err(Error::Other(format!(
            "{} of {} repositories failed",
            failed,
            report.results.len()
        )));
    }
    Ok(())
}

fn print_report(report: &Report, verb: &str) {
    if report.results.is_empty() {
        output::dimmed("no repositories cataloged");
        return;
    }

    for result in &report.results {
        match &result.failure {
            None => output::success(&format!("{} {}", output::key(&result.name), verb)),
            Some(failure) => output::error(&format!("{}: {}", output::key(&result.name), failure)),
        }
    }
}
