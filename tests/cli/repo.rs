//! Tests for `devex repo` and `devex app` commands.

use crate::support::*;

#[test]
fn test_add_list_show() {
    let t = Test::new();

    let output = t.repo_add("svc-a", "git@example.com:org/svc-a.git", "main", "/work/svc-a");
    assert_success(&output);
    assert_stdout_contains(&output, "added svc-a");

    let output = t.run(&["repo", "list"]);
    assert_success(&output);
    assert_stdout_contains(&output, "svc-a");
    assert_stdout_contains(&output, "/work/svc-a");

    let output = t.run(&["repo", "show", "svc-a"]);
    assert_success(&output);
    assert_stdout_contains(&output, "git@example.com:org/svc-a.git");
    assert_stdout_contains(&output, "main");
}

#[test]
fn test_add_duplicate_fails() {
    let t = Test::new();
    assert_success(&t.repo_add("svc-a", "url-1", "main", "/work/a"));

    let output = t.repo_add("svc-a", "url-2", "main", "/work/a2");
    assert_failure(&output);
    assert_stderr_contains(&output, "already cataloged");
}

#[test]
fn test_list_json_preserves_order() {
    let t = Test::new();
    for name in ["zeta", "alpha", "mid"] {
        assert_success(&t.repo_add(name, "url", "main", &format!("/work/{}", name)));
    }

    let output = t.run(&["repo", "list", "--json"]);
    assert_success(&output);

    let repos: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = repos
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_rm_repository() {
    let t = Test::new();
    assert_success(&t.repo_add("svc-a", "url", "main", "/work/a"));

    assert_success(&t.run(&["repo", "rm", "svc-a"]));

    let output = t.run(&["repo", "show", "svc-a"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "repository not found: svc-a");
}

#[test]
fn test_app_list_reads_hand_edited_storage() {
    let t = Test::new();
    std::fs::write(
        t.storage_path(),
        r#"version = 2

[[applications]]
name = "editor"
path = "/usr/bin/vim"
arguments = ["-u", "NONE"]
"#,
    )
    .unwrap();

    let output = t.run(&["app", "list"]);
    assert_success(&output);
    assert_stdout_contains(&output, "editor:");
    assert_stdout_contains(&output, "/usr/bin/vim -u NONE");
}
