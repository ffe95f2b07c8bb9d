//! Integration tests for running a child command with loaded variables.
//!
//! Responsibilities:
//! - Verify the child sees loaded variables.
//! - Verify the overload flag decides between pre-existing and loaded values.
//! - Verify the child's arguments reach it untouched.
//! - Verify the child's exit code is propagated.
//!
//! Invariants:
//! - Child commands use `sh`, so these tests are Unix-only.

#![cfg(unix)]

mod common;

use common::{envflag_cmd, write_env_file};
use predicates::prelude::*;
use tempfile::TempDir;

const PRINT_KEY: &str = "printf %s \"$RUN_KEY\"";

#[test]
fn test_child_sees_loaded_variable() {
    let temp_dir = TempDir::new().unwrap();
    write_env_file(temp_dir.path(), "run.env", "RUN_KEY=VALUE\n");

    envflag_cmd(temp_dir.path())
        .env_remove("RUN_KEY")
        .args(["-envs", "run.env", "--", "sh", "-c", PRINT_KEY])
        .assert()
        .success()
        .stdout("VALUE");
}

#[test]
fn test_existing_value_kept_without_overload() {
    let temp_dir = TempDir::new().unwrap();
    write_env_file(temp_dir.path(), "run.env", "RUN_KEY=VALUE\n");

    envflag_cmd(temp_dir.path())
        .env("RUN_KEY", "OLD")
        .args(["-envs", "run.env", "--", "sh", "-c", PRINT_KEY])
        .assert()
        .success()
        .stdout("OLD");
}

#[test]
fn test_existing_value_replaced_with_overload() {
    let temp_dir = TempDir::new().unwrap();
    write_env_file(temp_dir.path(), "run.env", "RUN_KEY=VALUE\n");

    envflag_cmd(temp_dir.path())
        .env("RUN_KEY", "OLD")
        .args(["-envs", "run.env", "-o", "--", "sh", "-c", PRINT_KEY])
        .assert()
        .success()
        .stdout("VALUE");
}

#[test]
fn test_child_flags_after_separator_are_not_collected() {
    let temp_dir = TempDir::new().unwrap();
    write_env_file(temp_dir.path(), ".env", "RUN_KEY=VALUE\n");

    // The child's own `-e` must reach it untouched.
    envflag_cmd(temp_dir.path())
        .env_remove("RUN_KEY")
        .args(["-e", "--", "sh", "-c", "printf %s \"$0:$RUN_KEY\"", "-e"])
        .assert()
        .success()
        .stdout("-e:VALUE");
}

#[test]
fn test_child_overload_flags_are_passed_through() {
    let temp_dir = TempDir::new().unwrap();

    envflag_cmd(temp_dir.path())
        .args(["--", "sh", "-c", "printf %s \"$*\"", "x", "-o", "a", "-o", "b"])
        .assert()
        .success()
        .stdout("-o a -o b");
}

#[test]
fn test_non_utf8_child_argument_is_passed_through() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();

    envflag_cmd(temp_dir.path())
        .args(["--", "sh", "-c", "printf %s \"$1\"", "x"])
        .arg(OsStr::from_bytes(b"caf\xe9"))
        .assert()
        .success()
        .stdout(b"caf\xe9".to_vec());
}

#[test]
fn test_child_exit_code_is_propagated() {
    let temp_dir = TempDir::new().unwrap();

    envflag_cmd(temp_dir.path())
        .args(["--", "sh", "-c", "exit 7"])
        .assert()
        .code(7);
}

#[test]
fn test_unknown_command_exits_127() {
    let temp_dir = TempDir::new().unwrap();

    envflag_cmd(temp_dir.path())
        .args(["--", "envflag-definitely-not-a-command"])
        .assert()
        .code(127)
        .stderr(predicate::str::contains("command not found"));
}
