//! Check command implementation
//!
//! This module implements the `stylegate check` command, which:
//! - Loads configuration from stylegate.toml
//! - Builds the rule registry and the layered resolver
//! - Discovers files to check
//! - Evaluates all enabled rules in parallel
//! - Formats output (human or JSONL)
//! - Returns an appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};
use crate::engine::EvaluationEngine;
use crate::error::ConfigError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::Violation;
use crate::types::Severity;

/// Error type specific to the check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Pipeline(#[from] crate::error::StylegateError),

    #[error("file walker error: {0}")]
    FileWalker(#[from] crate::engine::walker::FileWalkerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (no fatal violations)
/// - 1: Violations (error-severity violations, or warnings without --allow-warnings)
/// - 2: Error (configuration/I/O error)
/// - 3: Parse error (invalid TOML configuration)
pub fn run_check(
    config_path: &str,
    paths: &[String],
    format: Option<OutputFormat>,
    allow_warnings: bool,
    color: Option<ColorChoice>,
) -> i32 {
    match run_check_inner(config_path, paths, format, allow_warnings, color) {
        Ok(passed) => {
            if passed {
                EXIT_SUCCESS
            } else {
                EXIT_VIOLATIONS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                CheckError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                CheckError::Pipeline(crate::error::StylegateError::Config(
                    ConfigError::Parse(_),
                )) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

/// Internal implementation of the check command
fn run_check_inner(
    config_path: &str,
    paths: &[String],
    format: Option<OutputFormat>,
    allow_warnings: bool,
    color: Option<ColorChoice>,
) -> Result<bool, CheckError> {
    // 1. Load stylegate.toml; unset flags fall back to its [output] section
    let config = super::common::load_config(config_path)?;
    let format = super::common::effective_format(format, &config);
    let color = super::common::effective_color(color, &config);

    // 2. Build registry, resolver, and evaluator (fail fast on structural faults)
    let (registry, resolver, evaluator) = super::common::build_pipeline(&config)?;

    if registry.is_empty() {
        eprintln!("Warning: no rules are configured. Nothing to check.");
        return Ok(true);
    }

    // 3. Discover files
    let files = super::common::discover_files(paths, &config)?;

    if files.is_empty() {
        eprintln!("Warning: no files found to check.");
        return Ok(true);
    }

    if format == OutputFormat::Human {
        eprintln!(
            "Checking {} files against {} rules...",
            files.len(),
            registry.len()
        );
    }

    // 4. Evaluate all files in parallel
    let engine = EvaluationEngine::new(resolver, evaluator);
    let result = engine.run(files);

    // 5. Format and print output
    match format {
        OutputFormat::Human => {
            HumanFormatter::new(color.to_termcolor()).write_report(&result.violations)?;
        }
        OutputFormat::Jsonl => {
            JsonlFormatter::new().write_to_stdout(&result.violations);
        }
    }

    Ok(passes(&result.violations, allow_warnings))
}

/// Decides the pass/fail status of a violation list
///
/// Error-severity violations always fail. Warn-severity violations fail
/// unless --allow-warnings was given.
fn passes(violations: &[Violation], allow_warnings: bool) -> bool {
    let has_errors = violations.iter().any(|v| v.severity == Severity::Error);
    if has_errors {
        return false;
    }
    if allow_warnings {
        return true;
    }
    !violations.iter().any(|v| v.severity == Severity::Warn)
}
