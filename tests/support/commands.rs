//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a devex command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - DEVEX_HOME set to the temporary data directory
    /// - NO_COLOR set so output can be matched literally
    /// - Current directory set to the test working directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("devex").expect("failed to find devex binary");
        cmd.env("DEVEX_HOME", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("DEVEX_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run devex with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run devex")
    }

    /// Shortcut for `devex vault create`.
    pub fn create(&self, key: &str, val: &str) -> Output {
        self.run(&["vault", "create", "--key", key, "--value", val])
    }

    /// Shortcut for `devex vault get`.
    pub fn get(&self, key: &str) -> Output {
        self.run(&["vault", "get", "--key", key])
    }

    /// Shortcut for `devex vault update`.
    pub fn update(&self, key: &str, val: &str) -> Output {
        self.run(&["vault", "update", "--key", key, "--value", val])
    }

    /// Shortcut for `devex vault rm`.
    pub fn rm(&self, key: &str) -> Output {
        self.run(&["vault", "rm", "--key", key])
    }

    /// Shortcut for `devex vault list`.
    pub fn list(&self) -> Output {
        self.run(&["vault", "list"])
    }

    /// Shortcut for `devex vault list --json`.
    pub fn list_json(&self) -> Output {
        self.run(&["vault", "list", "--json"])
    }

    /// Shortcut for `devex repo add`.
    pub fn repo_add(&self, name: &str, remote: &str, branch: &str, folder: &str) -> Output {
        self.run(&[
            "repo", "add", name, "--remote", remote, "--branch", branch, "--folder", folder,
        ])
    }
}
