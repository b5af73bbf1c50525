//! Integration tests driving the `logsort` binary.

mod errors;
mod ordering;

use assert_cmd::Command;

#[allow(deprecated)]
pub fn logsort() -> Command {
    let mut cmd = Command::cargo_bin("logsort").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/logsort-test-no-config");
    cmd
}

/// Text after the last `] ` of each header line, in output order.
pub fn labels(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|l| l.starts_with("[20"))
        .filter_map(|l| l.rsplit("] ").next())
        .map(str::to_string)
        .collect()
}
