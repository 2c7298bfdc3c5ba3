//! Custom assertion macros with descriptive failure messages.

/// Assert that stdout or stderr contains the expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Apex Unit");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command failed.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        assert!(
            !$result.success,
            "Expected command to fail, but it succeeded.\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command succeeded.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected command to succeed (exit {}).\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the `name` fields of NDJSON `row` events, in order.
///
/// # Example
/// ```ignore
/// assert_row_names!(result, ["Production Area", "Warehouse"]);
/// ```
#[macro_export]
macro_rules! assert_row_names {
    ($result:expr, [$($name:expr),* $(,)?]) => {
        let expected: Vec<&str> = vec![$($name),*];
        let events = $result.json_events();
        let actual: Vec<String> = events
            .iter()
            .filter(|e| e["event"] == "row")
            .map(|e| e["name"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            actual, expected,
            "Unexpected rows.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
