//! Initialize a stylegate project
//!
//! Creates a starter configuration file for a new stylegate project.

use std::fs;
use std::path::Path;

/// Default content for stylegate.toml
const DEFAULT_STYLEGATE_TOML: &str = r#"[stylegate]
version = "1"

[files]
# File patterns to include (defaults to all)
# include = ["src/**", "*.ts"]

# File patterns to exclude
# exclude = ["**/generated/**", "**/vendor/**"]

[rules]
# The rule catalog. A bare string sets the default severity:
# semi = "error"
#
# A table adds options and a rationale. Rules with a `pattern` option get a
# built-in regex predicate; all other predicates come from the rule engine:
# no-todo-comments = { severity = "warn", options = { pattern = "TODO" } }

# Override layers relax or tighten rules for files matching a glob pattern.
# Later-declared layers win on conflicts:
# [[overrides]]
# pattern = "*.config.ts"
#
# [overrides.rules]
# no-unused-vars = "off"

[output]
format = "human"
color = "auto"
"#;

/// Error type for the init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Configuration file already exists
    #[error("{0} already exists. Use --force to overwrite.")]
    AlreadyExists(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the init command
///
/// Writes a starter configuration file at `config_path`. Refuses to
/// overwrite an existing file unless `force` is set.
pub fn run_init(config_path: &str, force: bool) -> Result<(), InitError> {
    let path = Path::new(config_path);

    if path.exists() && !force {
        return Err(InitError::AlreadyExists(config_path.to_string()));
    }

    fs::write(path, DEFAULT_STYLEGATE_TOML)?;
    Ok(())
}
