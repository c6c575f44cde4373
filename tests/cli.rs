#![cfg(all(unix, not(feature = "disable-logging")))]

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use dku_logger::FAIL_EXIT_CODE;

fn binary_output(log_dir: &Path, args: &[&str]) -> Output {
    let path = env!("CARGO_BIN_EXE_dku-logger");
    Command::new(path)
        .arg("--log-dir")
        .arg(log_dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap_or_else(|error| panic!("failed to run {}: {}", path, error))
}

fn log_lines(log_dir: &Path) -> Vec<String> {
    let text = fs::read_to_string(log_dir.join("DKUtilDemo.log")).expect("log file exists");
    text.lines().map(str::to_owned).collect()
}

// `_exit` keeps only the low byte of the code.
fn fail_status() -> i32 {
    (FAIL_EXIT_CODE & 0xff) as i32
}

#[test]
fn raise_fatal_exits_with_fail_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary_output(dir.path(), &["--raise", "fatal"]);

    assert_eq!(output.status.code(), Some(fail_status()), "{output:?}");
    assert_eq!(fail_status(), 76);

    let lines = log_lines(dir.path());
    let critical: Vec<_> = lines.iter().filter(|l| l.contains("[critical]")).collect();
    assert_eq!(critical.len(), 1, "{lines:?}");
    assert!(critical[0].ends_with(" demo fatal raised from the command line"));
    assert!(critical[0].contains("(main.rs:"));
    assert!(!lines.iter().any(|l| l.ends_with(" done")));
}

#[test]
fn raise_error_without_a_terminal_exits() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary_output(dir.path(), &["--raise", "error"]);

    assert_eq!(output.status.code(), Some(fail_status()), "{output:?}");

    let lines = log_lines(dir.path());
    assert!(
        lines
            .iter()
            .any(|l| l.contains("[critical]") && l.ends_with(" demo error raised from the command line"))
    );
    assert!(!lines.iter().any(|l| l.contains("error dismissed")));
}

#[test]
fn no_raise_runs_to_completion() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary_output(dir.path(), &["--raise", "none", "--plugin-version", "9.9.9"]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("DKUtilDemo.log"));

    let lines = log_lines(dir.path());
    assert!(lines[0].ends_with("Logger init - DKUtil 9.9.9"));
    assert!(lines.last().unwrap().ends_with(" done"));
    assert!(!lines.iter().any(|l| l.contains("[critical]")));
}
