//! Error types for flag resolution, argument rewriting and env file loading.
//!
//! Responsibilities:
//! - Define error variants for every failure the library can report.
//! - Translate `dotenvy` errors into a secret-safe `LoadFailure`.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Every error is returned, never raised by panicking; the caller decides to abort.
//! - Load errors NEVER include raw env file line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building flag roles, rewriting arguments or loading files.
#[derive(Error, Debug)]
pub enum EnvFlagError {
    #[error("only one configuration may be provided (got {count})")]
    MultipleConfigurationsProvided { count: usize },

    /// More than one overload-role alias was passed in a single invocation.
    #[error("only one overload flag may be passed (got '{first}' and '{second}')")]
    DuplicateOverloadFlag { first: String, second: String },

    #[error("flag '{flag}' needs a value")]
    MissingFlagValue { flag: String },

    #[error("invalid value '{value}' for flag '{flag}': expected a boolean")]
    InvalidFlagValue { flag: String, value: String },

    /// One of the requested env files could not be read or parsed.
    ///
    /// `paths` is the full list that was attempted; nothing was applied.
    #[error("error loading env files {paths:?} (failed at {})", .path.display())]
    EnvFileLoad {
        paths: Vec<PathBuf>,
        path: PathBuf,
        #[source]
        cause: LoadFailure,
    },
}

/// Why a single env file failed to load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// SAFETY: only the byte index of the parse failure is kept, NOT the line.
    #[error("invalid syntax at position {error_index}")]
    Parse { error_index: usize },

    #[error("failed to read file: {kind}")]
    Io { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("failed to load file")]
    Unknown,
}

impl From<dotenvy::Error> for LoadFailure {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => LoadFailure::Parse { error_index: idx },
            dotenvy::Error::Io(io_err) => LoadFailure::Io {
                kind: io_err.kind(),
            },
            _ => LoadFailure::Unknown,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = EnvFlagError> = std::result::Result<T, E>;
