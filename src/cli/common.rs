//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration,
//! discovering files, and building the resolution pipeline.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::config::{Config, ConfigResolver};
use crate::engine::walker::{FileWalker, FileWalkerError};
use crate::engine::Evaluator;
use crate::error::{ConfigError, StylegateError};
use crate::rules::RuleRegistry;
use std::path::{Path, PathBuf};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Picks the output format: an explicit flag wins over the `[output]` section
pub(crate) fn effective_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| config.output.format.into())
}

/// Picks the color choice: an explicit flag wins over the `[output]` section
pub(crate) fn effective_color(flag: Option<ColorChoice>, config: &Config) -> ColorChoice {
    flag.unwrap_or_else(|| config.output.color.into())
}

/// Load the stylegate.toml configuration
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file does not exist or cannot be read.
/// Returns `ConfigError::Parse` if it is invalid TOML.
pub(crate) fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_path = Path::new(path);
    if !config_path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found. Run 'stylegate init' to create it.", path),
        )));
    }

    Config::load(config_path)
}

/// Build the registry, resolver, and evaluator from a parsed configuration
///
/// All structural faults (duplicate rules, unknown rules in overrides,
/// uncompilable globs, invalid predicate options) surface here, before any
/// evaluation begins.
pub(crate) fn build_pipeline(
    config: &Config,
) -> Result<(RuleRegistry, ConfigResolver, Evaluator), StylegateError> {
    let registry = config.build_registry()?;
    let resolver = ConfigResolver::new(&registry, config.override_decls())?;
    let evaluator = Evaluator::from_registry(&registry)?;
    Ok((registry, resolver, evaluator))
}

/// Discover files to check under the given paths
///
/// Walks each path and collects all files that match the include/exclude
/// patterns from the configuration.
pub(crate) fn discover_files(
    paths: &[String],
    config: &Config,
) -> Result<Vec<PathBuf>, FileWalkerError> {
    let mut all_files = Vec::new();

    for path_str in paths {
        let walker = FileWalker::new(
            Path::new(path_str),
            &config.files.include,
            &config.files.exclude,
        )?;
        for result in walker.walk() {
            all_files.push(result?);
        }
    }

    Ok(all_files)
}
