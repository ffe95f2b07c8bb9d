//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `EnvFlagError`, `ArgsError` and `RunError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 matches clap's own usage-error code.
//! - Exit codes 126/127 follow the shell convention for commands that cannot run.

use envflag_config::EnvFlagError;
use thiserror::Error;

/// Structured exit codes for envflag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - variables printed or command finished with status 0.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Invalid arguments - repeated overload flag, bad flag value, bad config.
    ///
    /// Scripts should fix the invocation and not retry.
    InvalidArguments = 2,

    /// An env file could not be read or parsed.
    EnvFileLoad = 3,

    /// The command exists but could not be executed.
    CommandNotExecutable = 126,

    /// The command was not found on `PATH`.
    CommandNotFound = 127,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Problems with the raw command line found before flag handling.
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("argument is not valid UTF-8: {arg}")]
    NonUtf8Argument { arg: String },
}

/// Failures while starting the child command.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("command not found: {program}")]
    CommandNotFound { program: String },

    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<&EnvFlagError> for ExitCode {
    fn from(err: &EnvFlagError) -> Self {
        match err {
            EnvFlagError::MultipleConfigurationsProvided { .. }
            | EnvFlagError::DuplicateOverloadFlag { .. }
            | EnvFlagError::MissingFlagValue { .. }
            | EnvFlagError::InvalidFlagValue { .. } => ExitCode::InvalidArguments,
            EnvFlagError::EnvFileLoad { .. } => ExitCode::EnvFileLoad,
        }
    }
}

impl From<&ArgsError> for ExitCode {
    fn from(err: &ArgsError) -> Self {
        match err {
            ArgsError::NonUtf8Argument { .. } => ExitCode::InvalidArguments,
        }
    }
}

impl From<&RunError> for ExitCode {
    fn from(err: &RunError) -> Self {
        match err {
            RunError::CommandNotFound { .. } => ExitCode::CommandNotFound,
            RunError::Spawn { .. } => ExitCode::CommandNotExecutable,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<EnvFlagError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ArgsError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<RunError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}
