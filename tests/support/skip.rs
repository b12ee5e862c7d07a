/// Skip a test if no `git` executable is on PATH.
#[macro_export]
macro_rules! skip_without_git {
    () => {
        $crate::skip_without_program!("git")
    };
}

/// Skip a test if `$program` is not on PATH.
#[macro_export]
macro_rules! skip_without_program {
    ($program:expr) => {
        if which::which($program).is_err() {
            eprintln!("SKIPPED: {} not found on PATH", $program);
            return;
        }
    };
}
