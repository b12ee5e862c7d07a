//! Results of multi-repository operations.

use std::path::PathBuf;

use crate::error::Error;

/// Result of a gated operation.
#[derive(Debug)]
pub enum Outcome {
    /// The confirmation gate was declined; nothing ran.
    Cancelled,
    /// The batch ran; see the report for per-repository results.
    Completed(Report),
}

impl Outcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Outcome::Cancelled => None,
            Outcome::Completed(report) => Some(report),
        }
    }
}

/// Per-repository results of a batch, in processing order.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<RepoResult>,
}

impl Report {
    pub fn push(&mut self, result: RepoResult) {
        self.results.push(result);
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &RepoResult> {
        self.results.iter().filter(|r| r.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &RepoResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(RepoResult::is_success)
    }

    /// Result for a repository by name.
    pub fn get(&self, name: &str) -> Option<&RepoResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

/// What happened to one repository.
#[derive(Debug)]
pub struct RepoResult {
    pub name: String,
    pub folder: PathBuf,
    /// Steps that completed, as displayed command lines.
    pub completed: Vec<String>,
    /// The step that failed and why. `None` means every step succeeded.
    pub failure: Option<StepFailure>,
}

impl RepoResult {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// The first failing step of a repository pipeline.
#[derive(Debug)]
pub struct StepFailure {
    pub step: String,
    pub error: Error,
}

impl std::fmt::Display for StepFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.step, self.error)
    }
}
