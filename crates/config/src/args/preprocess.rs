//! Argument rewriting ahead of flag parsing.
//!
//! Responsibilities:
//! - Insert the default env path after env-file flags that have no value.
//! - Reject invocations that pass more than one overload flag.
//!
//! Does NOT handle:
//! - Extracting flag values (see `collect.rs`).
//!
//! Invariants:
//! - Index 0 (the program name) is copied and never scanned.
//! - Every input token appears in the output unchanged and in the same order;
//!   the only difference is inserted default-path tokens.
//! - Env-file flags may repeat; overload flags may not.
//! - Every token is scanned, including tokens after `--`.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{EnvFlagError, Result};
use crate::roles::FlagRoles;
use crate::types::FlagRole;

/// Rewrite `args` so that every env-file flag is followed by a value.
///
/// An env-file flag gets `roles.default_env_path()` inserted right after it
/// when it is the last argument or when the next argument starts with `-`.
/// Without that, a flag parser would either fail on the missing value or
/// take the next flag as the path.
///
/// Argument lists with no entries beyond the program name are returned as is.
///
/// # Errors
///
/// Returns `EnvFlagError::DuplicateOverloadFlag` if two overload-role flags
/// appear, regardless of which aliases were used.
pub fn preprocess(roles: &FlagRoles, args: Vec<String>) -> Result<Vec<String>> {
    if args.len() <= 1 {
        return Ok(args);
    }

    // One extra slot covers the common case of a single bare env-file flag.
    let mut out = Vec::with_capacity(args.len() + 1);
    let mut seen: HashMap<FlagRole, &str> = HashMap::with_capacity(2);
    out.push(args[0].clone());

    for (i, arg) in args.iter().enumerate().skip(1) {
        out.push(arg.clone());

        let Some(role) = roles.resolve(arg) else {
            continue;
        };

        if role.rejects_duplicates() {
            if let Some(first) = seen.get(&role) {
                return Err(EnvFlagError::DuplicateOverloadFlag {
                    first: first.to_string(),
                    second: arg.clone(),
                });
            }
            seen.insert(role, arg.as_str());
        }

        if role == FlagRole::EnvFile && needs_default(args.get(i + 1)) {
            debug!(flag = %arg, path = roles.default_env_path(), "Inserting default env path");
            out.push(roles.default_env_path().to_string());
        }
    }

    Ok(out)
}

fn needs_default(next: Option<&String>) -> bool {
    next.is_none_or(|next| next.starts_with('-'))
}
