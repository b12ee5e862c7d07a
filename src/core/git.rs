//! Git steps.
//!
//! Each step maps to exactly one `git` invocation. Git itself is a black
//! box; nothing here inspects repository state.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::runner::Invocation;
use crate::error::{Result, ValidationError};

/// Reject a branch or ref name that git would parse as an option.
pub fn ref_name(field: &'static str, value: &str) -> Result<()> {
    if value.starts_with('-') {
        return Err(ValidationError::OptionLike {
            field,
            value: value.to_string(),
        }
        .into());
    }
    Ok(())
}

/// One git command in a per-repository pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitStep {
    /// `git clone [--branch <branch>] -- <remote> <destination>`
    Clone {
        remote: String,
        branch: Option<String>,
        destination: PathBuf,
    },
    /// `git clean -fdx`: remove untracked and ignored files.
    Clean,
    /// `git reset --hard`: discard changes to tracked files.
    ResetHard,
    Fetch,
    Checkout(String),
    Pull,
    /// `git branch <name>`
    Branch(String),
    /// `git push --set-upstream <remote> <branch>`
    PushUpstream { remote: String, branch: String },
    /// `git config --global|--local <key> <value>`
    Config {
        global: bool,
        key: String,
        value: String,
    },
}

impl GitStep {
    /// Arguments following the program name.
    pub fn args(&self) -> Vec<String> {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        match self {
            GitStep::Clone {
                remote,
                branch,
                destination,
            } => {
                let mut args = vec!["clone".to_string()];
                if let Some(branch) = branch {
                    args.push("--branch".to_string());
                    args.push(branch.clone());
                }
                args.push("--".to_string());
                args.push(remote.clone());
                args.push(destination.display().to_string());
                args
            }
            GitStep::Clean => owned(&["clean", "-fdx"]),
            GitStep::ResetHard => owned(&["reset", "--hard"]),
            GitStep::Fetch => owned(&["fetch"]),
            GitStep::Checkout(branch) => owned(&["checkout", branch.as_str()]),
            GitStep::Pull => owned(&["pull"]),
            GitStep::Branch(name) => owned(&["branch", name.as_str()]),
            GitStep::PushUpstream { remote, branch } => {
                owned(&["push", "--set-upstream", remote.as_str(), branch.as_str()])
            }
            GitStep::Config { global, key, value } => {
                let scope = if *global { "--global" } else { "--local" };
                owned(&["config", scope, key.as_str(), value.as_str()])
            }
        }
    }

    /// Build the invocation for `program`, optionally inside `dir`.
    pub fn invocation(&self, program: &str, dir: Option<&Path>) -> Invocation {
        let invocation = Invocation::new(program).args(self.args());
        match dir {
            Some(dir) => invocation.current_dir(dir),
            None => invocation,
        }
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.args().join(" "))
    }
}
