//! Command dispatch logic.
//!
//! Responsibilities:
//! - Run the requested command with the loaded variables added to its environment.
//! - Print the loaded variables when no command is given.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Loading env files (see `main()`).
//!
//! Invariants:
//! - The envflag process environment itself is never modified; the child
//!   inherits it plus the loaded variables.

use std::io::{ErrorKind, Write};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use envflag_config::LoadedEnv;
use tracing::debug;

use crate::args::Cli;
use crate::error::{ExitCode, RunError};
use crate::formatters::{OutputFormat, format_vars};

/// Run the command line and return the process exit code.
pub(crate) fn run_command(cli: Cli, loaded: &LoadedEnv) -> Result<i32> {
    let Some((program, args)) = cli.command.split_first() else {
        let output = format_vars(cli.format, loaded)?;
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
        if cli.format == OutputFormat::Json {
            writeln!(stdout).context("Failed to write to stdout")?;
        }
        return Ok(ExitCode::Success.as_i32());
    };

    debug!(program = ?program, vars = loaded.len(), "Running command");
    let status = Command::new(program)
        .args(args)
        .envs(loaded.iter())
        .status()
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => RunError::CommandNotFound {
                program: program.to_string_lossy().into_owned(),
            },
            _ => RunError::Spawn {
                program: program.to_string_lossy().into_owned(),
                source,
            },
        })?;

    Ok(status_code(status))
}

#[cfg(unix)]
fn status_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    // Shell convention: 128 + signal number for signal termination.
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(ExitCode::GeneralError.as_i32())
}

#[cfg(not(unix))]
fn status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(ExitCode::GeneralError.as_i32())
}
