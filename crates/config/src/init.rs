//! Single entry point tying flag resolution, rewriting and collection together.

use tracing::debug;

use crate::args::{Collected, EnvSettings, collect, preprocess};
use crate::error::Result;
use crate::roles::FlagRoles;
use crate::types::Config;

/// Everything a host program needs after startup argument handling.
#[derive(Debug, Clone)]
pub struct Initialized {
    /// Raw arguments with default env paths inserted.
    pub args: Vec<String>,
    /// Program name plus every argument that was not an env-file or overload flag.
    pub remaining: Vec<String>,
    /// Collected env files and overload switch, ready for [`Loader`](crate::Loader).
    pub settings: EnvSettings,
    pub roles: FlagRoles,
}

/// Resolve the flag configuration, rewrite `args` and collect role flags.
///
/// `configs` holds zero or one [`Config`]; none means the built-in aliases.
/// The process environment is not touched.
///
/// Every token of `args` is scanned, including tokens after `--`. Hosts that
/// forward a child command should pass only their own arguments.
///
/// # Errors
///
/// - `EnvFlagError::MultipleConfigurationsProvided` for more than one config.
/// - `EnvFlagError::DuplicateOverloadFlag` for repeated overload flags.
/// - `EnvFlagError::InvalidFlagValue` for a non-boolean `-o=value`.
pub fn init<A, C>(args: A, configs: C) -> Result<Initialized>
where
    A: IntoIterator<Item = String>,
    C: IntoIterator<Item = Config>,
{
    let roles = FlagRoles::from_configs(configs)?;
    let args = preprocess(&roles, args.into_iter().collect())?;
    let Collected {
        settings,
        remaining,
    } = collect(&roles, args.clone())?;

    debug!(
        env_files = ?settings.env_files,
        overload = settings.overload,
        "Collected env flags"
    );

    Ok(Initialized {
        args,
        remaining,
        settings,
        roles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnvFlagError;
    use std::path::PathBuf;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bare_flags_accumulate_default_path() {
        let init = init(argv(&["prog", "-envs", "file1.env", "-envs"]), None).unwrap();

        assert_eq!(init.args, ["prog", "-envs", "file1.env", "-envs", ".env"]);
        assert_eq!(
            init.settings.env_files,
            [PathBuf::from("file1.env"), PathBuf::from(".env")]
        );
        assert_eq!(init.remaining, ["prog"]);
    }

    #[test]
    fn test_different_env_aliases_both_contribute() {
        let init = init(argv(&["prog", "-e", "-envs", "b.env", "run"]), None).unwrap();

        assert_eq!(
            init.settings.env_files,
            [PathBuf::from(".env"), PathBuf::from("b.env")]
        );
        assert_eq!(init.remaining, ["prog", "run"]);
    }

    #[test]
    fn test_duplicate_overload_fails() {
        let result = init(argv(&["prog", "-env-overload", "-env-overload"]), None);

        assert!(matches!(
            result,
            Err(EnvFlagError::DuplicateOverloadFlag { .. })
        ));
    }

    #[test]
    fn test_multiple_configs_fail_before_scanning() {
        let result = init(argv(&["prog"]), [Config::default(), Config::default()]);

        assert!(matches!(
            result,
            Err(EnvFlagError::MultipleConfigurationsProvided { count: 2 })
        ));
    }

    #[test]
    fn test_no_arguments_yields_defaults() {
        let config = Config {
            overload_by_default: true,
            ..Config::default()
        };

        let init = init(argv(&["prog"]), [config]).unwrap();
        assert!(init.settings.env_files.is_empty());
        assert!(init.settings.overload);
        assert_eq!(init.args, ["prog"]);
    }
}
