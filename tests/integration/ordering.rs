//! Ordering policies selected through flags.

use std::io::Write;

use crate::{labels, logsort};

const SCENARIO: &str = "\
[2020-01-01 10:00:00:000] [thread-1] A
[2020-01-01 10:00:01:000] [thread-2] B
[2020-01-01 10:00:00:500] [thread-1] C
";

const LATE_C: &str = "\
[2020-01-01 10:00:00:000] [thread-1] A
[2020-01-01 10:00:01:000] [thread-2] B
[2020-01-01 10:00:02:000] [thread-1] C
";

const MIXED: &str = "\
[2009-12-25 13:05:14:453] [INFO] [thread-140] server starting
[2009-12-25 13:05:14:460] [DEBUG] [thread-141] worker 1 ready
[2009-12-25 13:05:14:455] [INFO] [thread-140] loading config
    key=a
    key=b
[2009-12-25 13:05:14:401] [ERROR] [thread-142] late flush
[2009-12-25 13:05:14:458] [DEBUG] [thread-141] worker 1 idle
[2009-12-25 13:05:14:457] [INFO] [thread-140] config loaded
";

fn sorted(input: &str, args: &[&str]) -> String {
    let output = logsort()
        .args(args)
        .arg("-")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn default_is_chronological() {
    assert_eq!(labels(&sorted(SCENARIO, &[])), ["A", "C", "B"]);
    assert_eq!(labels(&sorted(LATE_C, &[])), ["A", "B", "C"]);
}

#[test]
fn chrono_flag() {
    assert_eq!(labels(&sorted(LATE_C, &["--chrono"])), ["A", "B", "C"]);
    assert_eq!(labels(&sorted(LATE_C, &["-c"])), ["A", "B", "C"]);
}

#[test]
fn thread_flag_clumps_threads() {
    assert_eq!(labels(&sorted(SCENARIO, &["--thread"])), ["A", "C", "B"]);
    assert_eq!(labels(&sorted(LATE_C, &["-t"])), ["A", "C", "B"]);
}

#[test]
fn thread_and_chrono_flags() {
    let out = sorted(MIXED, &["-t", "-c"]);
    assert_eq!(
        labels(&out),
        [
            "server starting",
            "loading config",
            "config loaded",
            "worker 1 idle",
            "worker 1 ready",
            "late flush",
        ]
    );
}

#[test]
fn thread_flag_keeps_original_order_inside_thread() {
    let out = sorted(MIXED, &["-t"]);
    assert_eq!(
        labels(&out),
        [
            "server starting",
            "loading config",
            "config loaded",
            "worker 1 ready",
            "worker 1 idle",
            "late flush",
        ]
    );
}

#[test]
fn line_order_reproduces_input() {
    assert_eq!(sorted(MIXED, &["--order", "line"]), MIXED);
}

#[test]
fn order_option_names() {
    assert_eq!(
        labels(&sorted(LATE_C, &["--order", "thread+chrono"])),
        ["A", "C", "B"]
    );
    assert_eq!(labels(&sorted(LATE_C, &["--order=chrono"])), ["A", "B", "C"]);
}

#[test]
fn chronological_output_is_monotonic() {
    let out = sorted(MIXED, &["--chrono"]);
    let stamps: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("[20"))
        .map(|l| &l[1..24])
        .collect();
    let mut expected = stamps.clone();
    expected.sort_unstable();
    assert_eq!(stamps, expected);
}

#[test]
fn continuation_lines_travel_with_header() {
    let out = sorted(MIXED, &["--chrono"]);
    assert!(out.contains("loading config\n    key=a\n    key=b\n"));
    assert_eq!(out.lines().count(), MIXED.lines().count());
}

#[test]
fn reads_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LATE_C.as_bytes()).unwrap();
    logsort()
        .arg("-t")
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            "\
[2020-01-01 10:00:00:000] [thread-1] A
[2020-01-01 10:00:02:000] [thread-1] C
[2020-01-01 10:00:01:000] [thread-2] B
",
        );
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("sorted.log");
    logsort()
        .arg("-o")
        .arg(&out_path)
        .arg("-")
        .write_stdin(LATE_C)
        .assert()
        .success()
        .stdout("");
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(labels(&written), ["A", "B", "C"]);
}
