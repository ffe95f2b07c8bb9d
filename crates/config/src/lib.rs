//! Env file flags for command-line programs.
//!
//! This crate lets a program accept `-envs [FILE]` style flags naming
//! dotenv files to load into its environment, plus an overload switch that
//! decides whether loaded values replace variables that are already set.
//! An env-file flag given without a value falls back to a default path.

mod args;
pub mod constants;
mod error;
mod init;
mod loader;
mod roles;
pub mod types;

pub use args::{Collected, EnvSettings, collect, preprocess};
pub use error::{EnvFlagError, LoadFailure, Result};
pub use init::{Initialized, init};
pub use loader::{LoadedEnv, Loader};
pub use roles::FlagRoles;
pub use types::{Config, FlagRole};
