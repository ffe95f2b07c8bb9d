//! Tests for the env file loader.
//!
//! Responsibilities:
//! - Test the no-op paths (no files, `DOTENV_DISABLED`).
//! - Test overload policy against pre-existing variables and across files.
//! - Test that read/parse failures leave the environment untouched.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_env_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
