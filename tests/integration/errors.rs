//! Fatal error reporting and exit codes.

use predicates::prelude::*;

use crate::logsort;

#[test]
fn missing_input_file() {
    logsort()
        .arg("/nonexistent/dir/app.log")
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("logsort: cannot read /nonexistent/dir/app.log"));
}

#[test]
fn missing_input_does_not_create_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("sorted.log");
    logsort()
        .arg("-o")
        .arg(&out_path)
        .arg(dir.path().join("missing.log"))
        .assert()
        .failure();
    assert!(!out_path.exists());
}

#[test]
fn unwritable_output_path() {
    logsort()
        .args(["-o", "/nonexistent/dir/out.log", "-"])
        .write_stdin("[2020-01-01 10:00:00:000] a\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot write /nonexistent/dir/out.log"));
}

#[test]
fn invalid_calendar_timestamp_is_fatal() {
    let input = "\
banner
[2020-01-01 10:00:00:000] ok
[2020-13-01 10:00:00:000] impossible month
";
    let output = logsort().arg("-").write_stdin(input).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid timestamp on line 2"));
    assert!(stderr.contains("2020-13-01 10:00:00:000"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("ok"), "records must not be emitted after a fatal error");
}

#[test]
fn non_utf8_input_is_read_error() {
    logsort()
        .arg("-")
        .write_stdin(&b"[2020-01-01 10:00:00:000] a\n\xff\xfe\n"[..])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot read <stdin>"));
}

#[test]
fn missing_logfile_argument_is_usage_error() {
    logsort().assert().failure().code(2);
}
