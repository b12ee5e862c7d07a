//! External command execution.
//!
//! The orchestrator never spawns processes itself; it hands an
//! [`Invocation`] to a [`Runner`]. [`SystemRunner`] is the real
//! implementation, tests substitute their own.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{CommandError, Result};

/// How an invocation is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Spawn `program` directly with `args`.
    Direct,
    /// Pass `program` as a command line to the platform shell
    /// (`sh -c` or `cmd /C`). `args` are appended space-separated.
    Shell,
}

/// A single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    mode: Mode,
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl Invocation {
    /// Direct invocation of `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            mode: Mode::Direct,
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Shell invocation of a full command line.
    pub fn shell(command_line: impl Into<String>) -> Self {
        Self {
            mode: Mode::Shell,
            ..Self::new(command_line)
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// The command line as a user would type it.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Capability to execute external commands.
pub trait Runner {
    /// Run `invocation` to completion.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NotFound` if the executable is missing,
    /// `CommandError::Spawn` if it cannot be started and
    /// `CommandError::Failed` on a non-zero exit.
    fn run(&self, invocation: &Invocation) -> Result<()>;

    /// Check that `program` can be executed at all.
    fn check(&self, _program: &str) -> Result<()> {
        Ok(())
    }
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        (**self).run(invocation)
    }

    fn check(&self, program: &str) -> Result<()> {
        (**self).check(program)
    }
}

/// Runs commands as child processes with inherited stdio, so git output
/// stays visible to the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(invocation: &Invocation) -> Result<Command> {
        let mut cmd = match invocation.mode {
            Mode::Direct => {
                let resolved =
                    which::which(&invocation.program).map_err(|_| CommandError::NotFound {
                        program: invocation.program.clone(),
                    })?;
                let mut cmd = Command::new(resolved);
                cmd.args(&invocation.args);
                cmd
            }
            Mode::Shell => {
                let (shell, flag) = if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") };
                let mut cmd = Command::new(shell);
                cmd.arg(flag).arg(invocation.command_line());
                cmd
            }
        };
        if let Some(dir) = &invocation.current_dir {
            cmd.current_dir(dir);
        }
        Ok(cmd)
    }
}

impl Runner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        debug!(
            command = %invocation,
            dir = ?invocation.working_dir(),
            "running command"
        );

        let status = Self::command(invocation)?
            .status()
            .map_err(|source| CommandError::Spawn {
                command: invocation.command_line(),
                source,
            })?;

        if !status.success() {
            return Err(CommandError::Failed {
                command: invocation.command_line(),
                code: status.code(),
            }
            .into());
        }
        Ok(())
    }

    fn check(&self, program: &str) -> Result<()> {
        which::which(program).map_err(|_| CommandError::NotFound {
            program: program.to_string(),
        })?;
        Ok(())
    }
}
