//! Tests for `devex bookmark` commands.

use crate::support::*;

#[test]
fn test_add_list_rm() {
    let t = Test::new();

    let output = t.run(&["bookmark", "add", "https://example.com/wiki"]);
    assert_success(&output);
    assert_stdout_contains(&output, "bookmarked");

    let output = t.run(&["bookmark", "add", "https://example.com/wiki"]);
    assert_success(&output);
    assert_stdout_contains(&output, "already bookmarked");

    let output = t.run(&["bookmark", "list", "--json"]);
    let bookmarks: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(bookmarks, vec!["https://example.com/wiki"]);

    assert_success(&t.run(&["bookmark", "rm", "https://example.com/wiki"]));
    let output = t.run(&["bookmark", "list"]);
    assert_stdout_contains(&output, "no bookmarks");
}

#[test]
fn test_rm_unknown_bookmark_fails() {
    let t = Test::new();

    let output = t.run(&["bookmark", "rm", "/nowhere"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "bookmark not found");
}
