//! Tests for `devex git` commands.
//!
//! These point `[git] program` at `true` or `false` so the workflows run
//! end to end without touching a real repository.

use crate::support::*;
use crate::skip_without_program;

fn catalog(t: &Test, names: &[&str]) -> Vec<std::path::PathBuf> {
    names
        .iter()
        .map(|name| {
            let folder = t.dir.path().join("work").join(name);
            let output = t.repo_add(
                name,
                &format!("git@example.com:org/{}.git", name),
                "main",
                folder.to_str().unwrap(),
            );
            assert_success(&output);
            folder
        })
        .collect()
}

#[test]
fn test_clone_all_creates_working_folders() {
    skip_without_program!("true");
    let t = Test::new();
    t.write_config("[git]\nprogram = \"true\"\n");
    let folders = catalog(&t, &["svc-a", "svc-b"]);

    let output = t.run(&["git", "clone-all"]);
    assert_success(&output);
    assert_stdout_contains(&output, "svc-a cloned");
    assert_stdout_contains(&output, "svc-b cloned");
    for folder in folders {
        assert!(folder.is_dir());
    }
}

#[test]
fn test_latest_without_tty_or_yes_is_cancelled() {
    skip_without_program!("true");
    let t = Test::new();
    t.write_config("[git]\nprogram = \"true\"\n");
    let folders = catalog(&t, &["svc-a"]);

    let output = t
        .cmd()
        .args(["git", "latest"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "cancelled");
    assert_stdout_excludes(&output, "up to date");
    assert!(!folders[0].exists());
}

#[test]
fn test_latest_with_yes_runs_every_repository() {
    skip_without_program!("true");
    let t = Test::new();
    t.write_config("[git]\nprogram = \"true\"\n");
    for folder in catalog(&t, &["svc-a", "svc-b"]) {
        std::fs::create_dir_all(folder).unwrap();
    }

    let output = t.run(&["--yes", "git", "latest", "--clean"]);
    assert_success(&output);
    assert_stdout_contains(&output, "svc-a up to date");
    assert_stdout_contains(&output, "svc-b up to date");
}

#[test]
fn test_failed_repository_exits_non_zero() {
    skip_without_program!("false");
    let t = Test::new();
    t.write_config("[git]\nprogram = \"false\"\n");
    for folder in catalog(&t, &["svc-a", "svc-b"]) {
        std::fs::create_dir_all(folder).unwrap();
    }

    let output = t.run(&["--yes", "git", "latest"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "svc-a: git reset --hard");
    assert_stderr_contains(&output, "svc-b: git reset --hard");
    assert_stderr_contains(&output, "`false reset --hard` exited with status 1");
    assert_stderr_contains(&output, "2 of 2 repositories failed");
}

#[test]
fn test_missing_working_folder_reported() {
    skip_without_program!("true");
    let t = Test::new();
    t.write_config("[git]\nprogram = \"true\"\n");
    catalog(&t, &["ghost"]);

    let output = t.run(&["--yes", "git", "latest"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "working folder does not exist");
}

#[test]
fn test_missing_git_program() {
    let t = Test::new();
    t.write_config("[git]\nprogram = \"devex-no-such-git\"\n");
    catalog(&t, &["svc-a"]);

    let output = t.run(&["--yes", "git", "latest"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "devex-no-such-git not found on PATH");
}

#[test]
fn test_branch_requires_issue_id() {
    let t = Test::new();

    let output = t.run(&["git", "branch", " "]);
    assert_failure(&output);
    assert_stderr_contains(&output, "issue id cannot be empty");
}

#[test]
fn test_branch_in_primary_and_shared_service() {
    skip_without_program!("true");
    let t = Test::new();
    t.write_config("[git]\nprogram = \"true\"\n\n[shared_service]\nfolder = \"common\"\n");
    std::fs::create_dir_all(t.dir.path().join("common")).unwrap();

    let output = t.run(&["git", "branch", "ISSUE-7"]);
    assert_success(&output);
    assert_stdout_contains(&output, "common on ISSUE-7");
}

#[test]
fn test_sync_shared_declined_without_yes() {
    skip_without_program!("true");
    let t = Test::new();
    t.write_config("[git]\nprogram = \"true\"\n");

    let output = t
        .cmd()
        .args(["git", "sync-shared"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "cancelled");
}

#[test]
fn test_profile_writes_global_config() {
    crate::skip_without_git!();
    let t = Test::new();
    // Point git's global config at the temp dir so the user's is untouched.
    let global = t.home.path().join("gitconfig");

    let output = t
        .cmd()
        .env("GIT_CONFIG_GLOBAL", &global)
        .args(["git", "profile", "--name", "Ada Lovelace", "--email", "ada@example.com"])
        .output()
        .unwrap();
    assert_success(&output);

    let contents = std::fs::read_to_string(&global).unwrap();
    assert!(contents.contains("Ada Lovelace"));
    assert!(contents.contains("ada@example.com"));
}
