//! envflag - load env files named on the command line, then run a command.
//!
//! Responsibilities:
//! - Rewrite and collect env-file/overload flags before clap parsing.
//! - Load the requested env files with the overload policy.
//! - Run the given command with the loaded variables, or print them.
//!
//! Does NOT handle:
//! - Env file syntax (delegated to `dotenvy` via `envflag_config`).
//!
//! Invariants:
//! - `envflag_config::init` runs BEFORE clap parsing so bare `-envs` flags
//!   never swallow the next option.
//! - Only arguments before the first `--` reach `init`; the child command
//!   after it is passed through as raw `OsString`s.
//! - Logging goes to stderr; stdout carries only printed variables or the
//!   child's output.

mod args;
mod dispatch;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::{Cli, SplitArgs, clap_args, split_command};
use clap::Parser;
use dispatch::run_command;
use envflag_config::Loader;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let SplitArgs { flags, command } =
        split_command(std::env::args_os()).context("Invalid command line")?;
    let init = envflag_config::init(flags, None).context("Invalid env file flags")?;
    let cli = Cli::parse_from(clap_args(init.remaining, command));

    let loaded = Loader::new(init.settings)
        .resolve()
        .context("Failed to load env files")?;
    if !loaded.is_empty() {
        tracing::info!(count = loaded.len(), "Loaded variables from env files");
    }

    run_command(cli, &loaded)
}
