//! Configuration types for flag registration.
//!
//! Responsibilities:
//! - Define the caller-facing `Config` with its built-in defaults.
//! - Define `FlagRole`, the semantic category a flag alias maps to.
//!
//! Does NOT handle:
//! - Building the alias lookup table (see `roles.rs`).

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENV_FLAGS, DEFAULT_ENV_PATH, DEFAULT_OVERLOAD_FLAGS};

/// Settings that control which flags are recognized and how they behave.
///
/// Aliases are written without leading dashes; `envs` matches both `-envs`
/// and `--envs` on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Aliases that name an env file to load.
    pub env_flags: Vec<String>,
    /// Aliases that toggle overwriting of already-set variables.
    pub overload_flags: Vec<String>,
    /// Path used when an env-file flag is given without a value.
    ///
    /// Left blank, it falls back to `.env`.
    pub default_env_path: String,
    /// Initial value of the overload switch before any flag is seen.
    pub overload_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_flags: DEFAULT_ENV_FLAGS.iter().map(|s| s.to_string()).collect(),
            overload_flags: DEFAULT_OVERLOAD_FLAGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_env_path: DEFAULT_ENV_PATH.to_string(),
            overload_by_default: false,
        }
    }
}

/// Semantic role of a recognized flag alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagRole {
    /// Names a settings file; repeatable.
    EnvFile,
    /// Boolean switch; at most once per invocation.
    Overload,
}

impl FlagRole {
    /// Whether a second occurrence of this role in one invocation is rejected.
    pub const fn rejects_duplicates(self) -> bool {
        matches!(self, FlagRole::Overload)
    }
}
