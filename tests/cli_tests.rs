//! Tests for the x12path command-line tool.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

/// Runs the binary with HOME pointed at an empty directory, so no user
/// config file is picked up.
fn run(args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_x12path"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_paths(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_check_clean_file_exits_zero() {
    let file = write_paths(&["/ISA_LOOP/GS_LOOP", "/ISA_LOOP/GS_LOOP/GS08", "NM1[85]03-1"]);
    let output = run(&["check", "--file", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("3 checked, 0 failed"));
}

#[test]
fn test_check_bad_path_reports_line_and_exits_one() {
    let file = write_paths(&["/2000A/NM1", "", "[434]02", "/2000A/2300/CLM05"]);
    let output = run(&["check", "--file", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("line 3: error: Path \"[434]02\" is invalid."));
    assert!(out.contains("3 checked, 1 failed"));
}

#[test]
fn test_check_strict_flags_loop_only_path() {
    let file = write_paths(&["/ISA_LOOP/GS_LOOP", "/ISA_LOOP/GS_LOOP/"]);
    let path = file.path().to_str().unwrap();

    let output = run(&["check", "--file", path]);
    assert_eq!(output.status.code(), Some(0));

    let output = run(&["--strict", "check", "--file", path]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("line 1: error:"));
    assert!(out.contains("'GS_LOOP'"));
    assert!(!out.contains("line 2:"));
}

#[test]
fn test_check_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");
    let output = run(&["check", "--file", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open"));
}

#[test]
fn test_format_prints_canonical_form() {
    let output = run(&["format", "/2000A/2300/", "SEG[434]02-1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "/2000A/2300\nSEG[434]02-1\n");
}

#[test]
fn test_format_error_goes_to_stderr() {
    let output = run(&["format", "/2000A/HL", "/2000A/02"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "/2000A/HL\n");
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("error: Path \"/2000A/02\" is invalid. Must specify a segment identifier"));
}

#[test]
fn test_parse_json_output() {
    let output = run(&["--output", "json", "parse", "/2000A/NM103"]);
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value[0]["canonical"], "/2000A/NM103");
    assert_eq!(value[0]["path"]["segment_id"], "NM1");
    assert_eq!(value[0]["path"]["element_index"], 3);
}

#[test]
fn test_parse_failure_exits_one() {
    let output = run(&["parse", "SEG", "[434]02"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.starts_with("SEG relative=true"));
    assert!(out.contains("error: Path \"[434]02\""));
}

#[test]
fn test_config_shows_effective_mode() {
    let output = run(&["--strict", "config"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("# trailing tokens: Strict"));
    assert!(out.contains("strict = true"));
}
