//! List command implementation
//!
//! This module implements the `stylegate list` command, which prints the
//! rule catalog: identifier, default severity, whether a local predicate is
//! available, and the rationale. Supports human-readable and JSONL output.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::error::ConfigError;
use serde::Serialize;

/// Error type specific to the list command
#[derive(Debug, thiserror::Error)]
enum ListError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Pipeline(#[from] crate::error::StylegateError),
}

/// Run the list command
///
/// # Returns
///
/// Exit code: 0 on success, 2 on error, 3 on configuration parse error.
pub fn run_list(config_path: &str, format: Option<OutputFormat>) -> i32 {
    match run_list_inner(config_path, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                ListError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

/// JSONL output structure for one catalog entry
#[derive(Debug, Serialize)]
struct JsonlRuleEntry<'a> {
    rule_id: &'a str,
    severity: &'a str,
    has_predicate: bool,
    rationale: &'a str,
}

/// Internal implementation of the list command
fn run_list_inner(config_path: &str, format: Option<OutputFormat>) -> Result<(), ListError> {
    let config = super::common::load_config(config_path)?;
    let format = super::common::effective_format(format, &config);
    let (registry, _resolver, evaluator) = super::common::build_pipeline(&config)?;

    if registry.is_empty() {
        if format == OutputFormat::Human {
            println!("No rules are configured.");
        }
        return Ok(());
    }

    match format {
        OutputFormat::Human => {
            println!("Rules ({} configured):", registry.len());
            println!();
            for rule in registry.all() {
                let predicate = if evaluator.has_check(rule.id()) {
                    "regex"
                } else {
                    "external"
                };
                println!("{} [{}] ({})", rule.id(), rule.severity(), predicate);
                if !rule.rationale().is_empty() {
                    println!("  {}", rule.rationale());
                }
            }
        }
        OutputFormat::Jsonl => {
            for rule in registry.all() {
                let entry = JsonlRuleEntry {
                    rule_id: rule.id().as_str(),
                    severity: rule.severity().as_str(),
                    has_predicate: evaluator.has_check(rule.id()),
                    rationale: rule.rationale(),
                };
                if let Ok(json) = serde_json::to_string(&entry) {
                    println!("{}", json);
                }
            }
        }
    }

    Ok(())
}
