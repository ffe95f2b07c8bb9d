//! Shared test utilities for envflag integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write env files into temporary directories.
//!
//! Invariants / Assumptions:
//! - `DOTENV_DISABLED` is always removed so loading is actually exercised.
//! - Commands run inside the given temp dir so a stray `.env` in the
//!   repository never leaks into a test.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns a hermetic `envflag` command running in `dir`.
pub fn envflag_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envflag");
    cmd.current_dir(dir)
        .env_remove("DOTENV_DISABLED")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_env_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
