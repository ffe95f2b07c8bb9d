//! Env file loader.
//!
//! Responsibilities:
//! - Read and parse every requested env file via `dotenvy`.
//! - Decide which variables to set according to the overload policy.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental loading in tests.
//!
//! Does NOT handle:
//! - Writing to the process environment (see `LoadedEnv::apply`).
//!
//! Invariants / Assumptions:
//! - All files are parsed before any decision is returned; a failure on any
//!   file means nothing is applied.
//! - Without overload, pre-existing variables and earlier files win.
//! - With overload, later files win over earlier files and pre-existing variables.
//! - `${VAR}` substitution inside a file sees that file's earlier lines and
//!   the process environment, never values from earlier files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::loaded::LoadedEnv;
use crate::args::EnvSettings;
use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::{EnvFlagError, LoadFailure, Result};

/// Loads the env files gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    env_files: Vec<PathBuf>,
    overload: bool,
}

impl From<EnvSettings> for Loader {
    fn from(settings: EnvSettings) -> Self {
        Self::new(settings)
    }
}

impl Loader {
    pub fn new(settings: EnvSettings) -> Self {
        Self {
            env_files: settings.env_files,
            overload: settings.overload,
        }
    }

    /// Files this loader will read, in order.
    pub fn env_files(&self) -> &[PathBuf] {
        &self.env_files
    }

    pub fn overload(&self) -> bool {
        self.overload
    }

    /// Check if env file loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Decide which variables to set, checking the current process environment.
    ///
    /// Returns an empty `LoadedEnv` when no files were requested or when
    /// `DOTENV_DISABLED` is `1` or `true`.
    ///
    /// Files are parsed independently, so `${VAR}` in one file does not
    /// expand to a value defined in an earlier file.
    ///
    /// # Errors
    ///
    /// Returns `EnvFlagError::EnvFileLoad` if any file cannot be read or parsed.
    pub fn resolve(&self) -> Result<LoadedEnv> {
        self.resolve_with(|key| std::env::var_os(key).is_some())
    }

    /// Like [`resolve`](Self::resolve), with `is_set` reporting which keys
    /// already have a value.
    pub fn resolve_with<F>(&self, is_set: F) -> Result<LoadedEnv>
    where
        F: Fn(&str) -> bool,
    {
        if self.env_files.is_empty() {
            return Ok(LoadedEnv::default());
        }
        if Self::dotenv_disabled() {
            debug!(files = ?self.env_files, "Env file loading disabled by {}", DOTENV_DISABLED_VAR);
            return Ok(LoadedEnv::default());
        }

        let mut parsed = Vec::with_capacity(self.env_files.len());
        for path in &self.env_files {
            let pairs = read_env_file(path).map_err(|cause| EnvFlagError::EnvFileLoad {
                paths: self.env_files.clone(),
                path: path.clone(),
                cause,
            })?;
            debug!(path = %path.display(), count = pairs.len(), "Parsed env file");
            parsed.push(pairs);
        }

        let mut vars: Vec<(String, String)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (key, value) in parsed.into_iter().flatten() {
            match index.get(&key) {
                Some(&i) if self.overload => vars[i].1 = value,
                Some(_) => {}
                None if !self.overload && is_set(&key) => {}
                None => {
                    index.insert(key.clone(), vars.len());
                    vars.push((key, value));
                }
            }
        }

        Ok(LoadedEnv::from_pairs(vars))
    }

    /// Resolve and write the result to the process environment.
    ///
    /// # Safety
    ///
    /// Same contract as [`LoadedEnv::apply`]: no other thread may read or
    /// write the environment concurrently.
    ///
    /// # Errors
    ///
    /// Returns `EnvFlagError::EnvFileLoad` if any file cannot be read or
    /// parsed; the environment is left untouched in that case.
    pub unsafe fn load(&self) -> Result<LoadedEnv> {
        let loaded = self.resolve()?;
        // SAFETY: forwarded from the caller.
        unsafe { loaded.apply() };
        Ok(loaded)
    }
}

fn read_env_file(path: &Path) -> std::result::Result<Vec<(String, String)>, LoadFailure> {
    let iter = dotenvy::from_path_iter(path)?;
    let pairs = iter.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(pairs)
}
