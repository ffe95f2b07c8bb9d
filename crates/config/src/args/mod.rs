//! Command-line handling for env-file and overload flags.
//!
//! Responsibilities:
//! - Rewrite raw arguments so bare env-file flags get the default path (`preprocess`).
//! - Extract role flag values and pass the rest through (`collect`).
//!
//! Does NOT handle:
//! - Parsing the host program's own flags (left to the caller, e.g. clap).
//! - Reading env files (see `loader`).

mod collect;
mod preprocess;

pub use collect::{Collected, EnvSettings, collect};
pub use preprocess::preprocess;
