//! Resolve command implementation
//!
//! This module implements the `stylegate resolve` command, which prints the
//! effective rule set for one file path. It makes the layered override
//! resolution directly observable: each entry shows the effective severity
//! and whether an override layer changed it from the base.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::error::ConfigError;
use serde::Serialize;

/// Error type specific to the resolve command
#[derive(Debug, thiserror::Error)]
enum ResolveError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Pipeline(#[from] crate::error::StylegateError),
}

/// Run the resolve command
///
/// # Returns
///
/// Exit code: 0 on success, 2 on error, 3 on configuration parse error.
pub fn run_resolve(config_path: &str, path: &str, format: Option<OutputFormat>) -> i32 {
    match run_resolve_inner(config_path, path, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                ResolveError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

/// JSONL output structure for one resolved entry
#[derive(Debug, Serialize)]
struct JsonlResolvedEntry<'a> {
    rule_id: &'a str,
    severity: &'a str,
    overridden: bool,
}

/// Internal implementation of the resolve command
fn run_resolve_inner(
    config_path: &str,
    path: &str,
    format: Option<OutputFormat>,
) -> Result<(), ResolveError> {
    let config = super::common::load_config(config_path)?;
    let format = super::common::effective_format(format, &config);
    let (registry, resolver, _evaluator) = super::common::build_pipeline(&config)?;

    let resolved = resolver.resolve(path);

    match format {
        OutputFormat::Human => {
            println!("Effective rules for {}:", path);
            println!();
            for rule in registry.all() {
                // Resolution is total over the registry
                let Some(effective) = resolved.get(rule.id()) else {
                    continue;
                };
                let marker = if effective.severity != rule.severity() {
                    " (overridden)"
                } else {
                    ""
                };
                println!("{} [{}]{}", rule.id(), effective.severity, marker);
            }
        }
        OutputFormat::Jsonl => {
            for rule in registry.all() {
                let Some(effective) = resolved.get(rule.id()) else {
                    continue;
                };
                let entry = JsonlResolvedEntry {
                    rule_id: rule.id().as_str(),
                    severity: effective.severity.as_str(),
                    overridden: effective.severity != rule.severity(),
                };
                if let Ok(json) = serde_json::to_string(&entry) {
                    println!("{}", json);
                }
            }
        }
    }

    Ok(())
}
