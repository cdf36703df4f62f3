use std::env;
use std::path::PathBuf;

use crate::cli::Args;
use crate::core::app;
use crate::core::collector::{CollectOptions, OutputTarget};
use crate::core::exclude::ExclusionSet;

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub output: OutputTarget,
    pub exclusions: ExclusionSet,
    pub options: CollectOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid exclude name {0:?}: expected a plain directory name")]
    InvalidExcludeName(String),
}

/// Load configuration from CLI flags, falling back to environment variables
/// and then to built-in defaults.
pub fn load(args: &Args) -> Result<Config, ConfigError> {
    resolve(args, |key| env::var(key).ok())
}

fn resolve<F>(args: &Args, env_var: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from(app::DEFAULT_ROOT));

    let output = args
        .output
        .clone()
        .or_else(|| env_var(app::ENV_OUTPUT).filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| app::DEFAULT_OUTPUT.to_string());

    let mut extra: Vec<String> = env_var(app::ENV_EXCLUDE)
        .map(|v| split_names(&v))
        .unwrap_or_default();
    extra.extend(args.exclude.iter().cloned());
    for name in &extra {
        validate_name(name)?;
    }

    let base = if args.no_default_excludes {
        ExclusionSet::empty()
    } else {
        ExclusionSet::defaults()
    };

    Ok(Config {
        root,
        output: OutputTarget::parse(&output),
        exclusions: base.with(extra),
        options: CollectOptions {
            sort: args.sort,
            follow_links: args.follow_links,
            max_depth: args.max_depth,
        },
    })
}

/// Comma-separated list; blanks are dropped.
fn split_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Exclusion matches a single path component, so separators can never match.
fn validate_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ConfigError::InvalidExcludeName(name.to_string()));
    }
    Ok(())
}
