//! Error reporting and exit status tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_errors_go_to_stderr_with_exit_code_one() {
    let t = Test::new();

    let output = t.get("missing");
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "secret not found: missing");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_not_found_suggests_similar_keys() {
    let t = Test::with_secrets(&[("api_token", "abc123")]);

    let output = t.get("api");
    assert_failure(&output);
    assert_stderr_contains(&output, "did you mean: api_token");
}

#[test]
fn test_duplicate_create_hints_update() {
    let t = Test::with_secrets(&[("api_token", "abc123")]);

    let output = t.create("api_token", "x");
    assert_failure(&output);
    assert_stdout_contains(&output, "devex vault update");
}

#[test]
fn test_corrupt_storage_is_reported() {
    let t = Test::new();
    std::fs::write(t.storage_path(), "version = [unterminated").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "is corrupt");
}

#[test]
fn test_newer_storage_version_rejected() {
    let t = Test::new();
    std::fs::write(t.storage_path(), "version = 99\n").unwrap();

    let output = t.run(&["repo", "list"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "newer than supported");
    assert_eq!(t.storage_contents(), "version = 99\n");
}

#[test]
fn test_unknown_repository_hint() {
    let t = Test::new();

    let output = t.run(&["repo", "show", "nope"]);
    assert_failure(&output);
    assert_stdout_contains(&output, "devex repo list");
}

#[test]
fn test_completions_generate() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_devex"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let t = Test::new();

    t.cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_vault_create_requires_value() {
    let t = Test::new();

    t.cmd()
        .args(["vault", "create", "--key", "api_token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--value"));
    assert!(!t.storage_path().exists());
}
