//! Env file loading.
//!
//! Responsibilities:
//! - Load the env files collected from the command line (`Loader`).
//! - Apply the overload policy against the current environment.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental loading in tests.
//!
//! Does NOT handle:
//! - Deciding which files to load (see `args`).
//!
//! Invariants / Assumptions:
//! - An empty file list is a successful no-op.
//! - The process environment is only written by `LoadedEnv::apply` / `Loader::load`.

mod builder;
mod loaded;

pub use builder::Loader;
pub use loaded::LoadedEnv;

#[cfg(test)]
mod tests;
