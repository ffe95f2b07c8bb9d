//! Centralized constants for the envflag workspace.
//!
//! This module contains the built-in flag aliases and paths used when the
//! caller does not supply its own configuration.

/// Path substituted when an env-file flag is given without a value.
pub const DEFAULT_ENV_PATH: &str = ".env";

/// Built-in aliases for the env-file role, in registration order.
pub const DEFAULT_ENV_FLAGS: &[&str] = &["envs", "e"];

/// Built-in aliases for the overload role, in registration order.
pub const DEFAULT_OVERLOAD_FLAGS: &[&str] = &["env-overload", "eo", "o"];

/// Environment variable that disables env file loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Token that ends flag processing; everything after it is positional.
pub const END_OF_FLAGS: &str = "--";
