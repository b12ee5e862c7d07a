//! Test assertion helpers.

use std::process::Output;

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert the command exited zero, showing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got {:?}\nstderr: {}",
        output.status.code(),
        stderr(output)
    );
}

/// Assert the command exited with status 1, the code every devex error uses.
pub fn assert_failure(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit status 1\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

fn assert_stream(name: &str, text: &str, needle: &str, present: bool) {
    assert_eq!(
        text.contains(needle),
        present,
        "{} {} '{}', got: {}",
        name,
        if present { "missing" } else { "should not contain" },
        needle,
        text
    );
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    assert_stream("stdout", &stdout(output), expected, true);
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    assert_stream("stderr", &stderr(output), expected, true);
}

pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    assert_stream("stdout", &stdout(output), excluded, false);
}

/// Assert a secret can be created and read back unchanged.
pub fn assert_roundtrip(t: &super::Test, key: &str, value: &str) {
    assert_success(&t.create(key, value));

    let output = t.get(key);
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end_matches('\n'), value);
}
