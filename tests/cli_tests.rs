//! Integration tests for argument handling
//!
//! A valid interval starts the endless cycle loop, so these tests only cover
//! the paths that terminate: argument validation and help output.

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::leech_cmd;

#[test]
fn test_missing_interval_fails() {
    leech_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("INTERVAL_MINUTES"));
}

#[test]
fn test_non_numeric_interval_fails() {
    leech_cmd()
        .arg("every-hour")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_zero_interval_fails() {
    leech_cmd().arg("0").assert().failure();
}

#[test]
fn test_invalid_interval_touches_no_files() {
    let temp = TempDir::new().unwrap();

    leech_cmd()
        .current_dir(temp.path())
        .arg("not-a-number")
        .assert()
        .failure();

    // Argument validation happens before any file or repository operation
    assert!(!temp.path().join("leech.log").exists());
    assert!(!temp.path().join(".git").exists());
}

#[test]
fn test_missing_interval_touches_no_files() {
    let temp = TempDir::new().unwrap();

    leech_cmd().current_dir(temp.path()).assert().failure();

    assert!(!temp.path().join("leech.log").exists());
    assert!(!temp.path().join(".git").exists());
}

#[test]
fn test_help_describes_interval() {
    leech_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INTERVAL_MINUTES"))
        .stdout(predicate::str::contains("Minutes to wait between cycles"));
}

#[test]
fn test_version_flag() {
    leech_cmd().arg("--version").assert().success();
}
