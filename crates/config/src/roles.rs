//! Flag alias resolution.
//!
//! Responsibilities:
//! - Build the alias → role lookup table once from a `Config`.
//! - Enforce that at most one `Config` is supplied.
//! - Normalize the default env path (blank falls back to `.env`).
//! - Resolve a command-line token (`-name` or `--name`) to its role.
//!
//! Invariants:
//! - `FlagRoles` is immutable once built.
//! - `default_env_path()` is never empty.
//! - If an alias is registered for both roles, the overload role wins.

use std::collections::HashMap;

use tracing::warn;

use crate::constants::DEFAULT_ENV_PATH;
use crate::error::{EnvFlagError, Result};
use crate::types::{Config, FlagRole};

/// Lookup table of recognized flag aliases plus the defaults they imply.
#[derive(Debug, Clone)]
pub struct FlagRoles {
    aliases: HashMap<String, FlagRole>,
    env_flags: Vec<String>,
    overload_flags: Vec<String>,
    default_env_path: String,
    overload_by_default: bool,
}

impl Default for FlagRoles {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl FlagRoles {
    /// Build the lookup table from a single configuration.
    pub fn new(config: Config) -> Self {
        let Config {
            env_flags,
            overload_flags,
            default_env_path,
            overload_by_default,
        } = config;

        let mut aliases = HashMap::with_capacity(env_flags.len() + overload_flags.len());
        for alias in env_flags.iter().filter(|a| !a.is_empty()) {
            aliases.insert(alias.clone(), FlagRole::EnvFile);
        }
        for alias in overload_flags.iter().filter(|a| !a.is_empty()) {
            if aliases.insert(alias.clone(), FlagRole::Overload) == Some(FlagRole::EnvFile) {
                warn!(alias = %alias, "Flag alias registered for both roles; treating it as overload");
            }
        }

        let default_env_path = if default_env_path.is_empty() {
            DEFAULT_ENV_PATH.to_string()
        } else {
            default_env_path
        };

        Self {
            aliases,
            env_flags,
            overload_flags,
            default_env_path,
            overload_by_default,
        }
    }

    /// Build the lookup table from zero or one configurations.
    ///
    /// No configuration means the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `EnvFlagError::MultipleConfigurationsProvided` if more than one
    /// configuration is supplied.
    pub fn from_configs<I>(configs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Config>,
    {
        let mut configs: Vec<Config> = configs.into_iter().collect();
        match configs.len() {
            0 => Ok(Self::default()),
            1 => Ok(Self::new(configs.remove(0))),
            count => Err(EnvFlagError::MultipleConfigurationsProvided { count }),
        }
    }

    /// Look up an alias written without leading dashes.
    pub fn role_of(&self, alias: &str) -> Option<FlagRole> {
        self.aliases.get(alias).copied()
    }

    /// Resolve a raw command-line token to a role.
    ///
    /// One leading dash is stripped first; a second one only for `--name`
    /// tokens. Tokens shorter than two characters or without a leading dash
    /// never resolve.
    pub fn resolve(&self, token: &str) -> Option<FlagRole> {
        if token.len() < 2 {
            return None;
        }
        let single = token.strip_prefix('-')?;
        self.role_of(single).or_else(|| {
            single
                .strip_prefix('-')
                .and_then(|double| self.role_of(double))
        })
    }

    /// Aliases registered for the env-file role, in configuration order.
    pub fn env_flags(&self) -> &[String] {
        &self.env_flags
    }

    /// Aliases registered for the overload role, in configuration order.
    pub fn overload_flags(&self) -> &[String] {
        &self.overload_flags
    }

    /// Path substituted for an env-file flag given without a value.
    pub fn default_env_path(&self) -> &str {
        &self.default_env_path
    }

    /// Initial value of the overload switch.
    pub fn overload_by_default(&self) -> bool {
        self.overload_by_default
    }
}
