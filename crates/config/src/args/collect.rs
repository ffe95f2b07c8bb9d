//! Extraction of env-file and overload values from rewritten arguments.
//!
//! Responsibilities:
//! - Fill `EnvSettings` from the registered aliases.
//! - Hand every unrecognized token back, in order, for the host program's parser.
//!
//! Does NOT handle:
//! - Default-path insertion or duplicate detection (see `preprocess.rs`).
//!
//! Invariants:
//! - Env-file flags take an inline `=value` or consume the next token.
//! - Overload flags never consume the next token.
//! - `--` stops collection; it and everything after it are passed through.

use std::path::PathBuf;

use tracing::debug;

use crate::constants::END_OF_FLAGS;
use crate::error::{EnvFlagError, Result};
use crate::roles::FlagRoles;
use crate::types::FlagRole;

/// Values accumulated from env-file and overload flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    /// Files to load, in the order their flags appeared.
    pub env_files: Vec<PathBuf>,
    /// Whether loaded values replace variables that are already set.
    pub overload: bool,
}

/// Result of collecting role flags out of an argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    pub settings: EnvSettings,
    /// Program name followed by every token that was not a role flag.
    pub remaining: Vec<String>,
}

/// Split role flags out of `args`.
///
/// Expects arguments that already went through [`preprocess`](super::preprocess).
///
/// # Errors
///
/// - `EnvFlagError::MissingFlagValue` if an env-file flag ends the list.
/// - `EnvFlagError::InvalidFlagValue` if an overload flag has a non-boolean inline value.
pub fn collect(roles: &FlagRoles, args: Vec<String>) -> Result<Collected> {
    let mut settings = EnvSettings {
        env_files: Vec::new(),
        overload: roles.overload_by_default(),
    };
    let mut remaining = Vec::with_capacity(args.len());

    let mut iter = args.into_iter();
    remaining.extend(iter.next());

    while let Some(arg) = iter.next() {
        if arg == END_OF_FLAGS {
            remaining.push(arg);
            remaining.extend(iter);
            break;
        }

        let (name, inline) = match arg.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (arg.as_str(), None),
        };

        match roles.resolve(name) {
            None => remaining.push(arg),
            Some(FlagRole::EnvFile) => {
                let path = match inline {
                    Some(value) => value.to_string(),
                    None => iter.next().ok_or_else(|| EnvFlagError::MissingFlagValue {
                        flag: arg.clone(),
                    })?,
                };
                debug!(flag = %name, path = %path, "Collected env file");
                settings.env_files.push(PathBuf::from(path));
            }
            Some(FlagRole::Overload) => {
                settings.overload = match inline {
                    Some(value) => {
                        parse_bool(value).ok_or_else(|| EnvFlagError::InvalidFlagValue {
                            flag: name.to_string(),
                            value: value.to_string(),
                        })?
                    }
                    None => true,
                };
            }
        }
    }

    Ok(Collected {
        settings,
        remaining,
    })
}

/// Parse the boolean spellings accepted by conventional flag parsers.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
