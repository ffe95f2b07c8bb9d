//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Split the raw argument list into envflag's own flags and the child command.
//!
//! Non-responsibilities:
//! - Env-file and overload flags are consumed by `envflag_config::init`
//!   before clap sees the arguments; they are only documented here.
//! - Does not execute anything (see `dispatch` module).

use std::ffi::OsString;

use clap::Parser;
use envflag_config::constants::END_OF_FLAGS;

use crate::error::ArgsError;
use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "envflag")]
#[command(about = "Load env files named on the command line, then run a command", long_about = None)]
#[command(version)]
#[command(
    after_help = "Env file flags (single or double dash):\n  -envs, -e [FILE]          Load FILE into the environment (default: .env); repeatable\n  -env-overload, -eo, -o    Let loaded values replace variables that are already set\n\nExamples:\n  envflag -envs -- ./server --port 8080\n  envflag -e prod.env -o -- printenv DATABASE_URL\n  envflag -envs base.env -envs local.env --format json\n"
)]
pub struct Cli {
    /// Output format used when no command is given
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Env)]
    pub format: OutputFormat,

    /// Command to run with the loaded variables (must follow `--`)
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<OsString>,
}

/// Raw arguments split at the first `--`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SplitArgs {
    /// Program name plus envflag's own flags; always valid UTF-8.
    pub flags: Vec<String>,
    /// Child command and its arguments, untouched.
    pub command: Vec<OsString>,
}

/// Arguments for clap: `remaining` flags, then `--` and the command if any.
pub fn clap_args(remaining: Vec<String>, command: Vec<OsString>) -> Vec<OsString> {
    let mut out: Vec<OsString> = remaining.into_iter().map(OsString::from).collect();
    if !command.is_empty() {
        out.push(OsString::from(END_OF_FLAGS));
        out.extend(command);
    }
    out
}

/// Split `args` at the first `--`.
///
/// Everything before the separator is envflag's own and must be UTF-8; the
/// program name is converted lossily. The separator itself is dropped and
/// everything after it is kept as given, further `--` tokens included.
///
/// # Errors
///
/// Returns `ArgsError::NonUtf8Argument` for a non-UTF-8 flag token.
pub fn split_command<I>(args: I) -> Result<SplitArgs, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut split = SplitArgs::default();

    if let Some(program) = args.next() {
        split.flags.push(program.to_string_lossy().into_owned());
    }

    for arg in args.by_ref() {
        if arg == *END_OF_FLAGS {
            break;
        }
        let arg = arg.into_string().map_err(|arg| ArgsError::NonUtf8Argument {
            arg: arg.to_string_lossy().into_owned(),
        })?;
        split.flags.push(arg);
    }

    split.command.extend(args);
    Ok(split)
}
