//! End-to-end tests running the built `tapgen` binary.
//!
//! Dispatch is covered in-process by the tests in `src/main.rs`; these
//! check what only a real process shows: exit status and which stream
//! each kind of output lands on.

use std::process::{Command, Output};

fn tapgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tapgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tapgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

const USAGE: &str = "Usage: tapgen <wavelet_name>\nExample: tapgen db4\n";

#[test]
fn export_succeeds_with_quiet_stderr() {
    let output = tapgen(&["haar"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("// haar wavelet filters\n\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn unknown_wavelet_exits_zero_on_stdout() {
    let output = tapgen(&["nonexistent_wavelet_xyz"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 1);
    assert!(output.stderr.is_empty());
}

#[test]
fn wrong_argument_counts_print_usage() {
    for args in [&[][..], &["db4", "sym5"], &["db4", "x", "--list"]] {
        let output = tapgen(args);
        assert!(output.status.success(), "{args:?}");
        assert_eq!(stdout(&output), USAGE, "{args:?}");
    }
}

#[test]
fn unknown_flag_next_to_name_prints_usage() {
    let output = tapgen(&["db4", "--bogus"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), USAGE);
    assert!(output.stderr.is_empty());
}

#[test]
fn help_is_left_to_clap() {
    let output = tapgen(&["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("--list"));
    assert_ne!(out, USAGE);
}

#[test]
fn logging_stays_off_stdout() {
    let output = tapgen(&["-vvv", "db2"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("// db2 wavelet filters\n\n"));
    assert_eq!(out.matches("const float db2_").count(), 4);
    assert!(!output.stderr.is_empty());
}

#[test]
fn list_prints_families() {
    let output = tapgen(&["--list"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 7);
    assert!(out.ends_with("dmey: dmey\n"));
}
