//! Error types for Stylegate
//!
//! This module defines the error types used throughout Stylegate, following
//! a hierarchical structure with specific error variants for different
//! error categories. Registry and configuration errors are structural faults
//! that abort resolution before any evaluation begins; per-rule execution
//! failures are reported as violations instead (see `engine::evaluator`).

use crate::types::RuleId;

/// Registry-related errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A rule with this identifier is already registered
    #[error("duplicate rule '{0}'")]
    DuplicateRule(RuleId),

    /// No rule with this identifier is registered
    #[error("unknown rule '{0}'")]
    UnknownRule(RuleId),
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration syntax
    #[error("invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// A glob pattern that cannot be compiled
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// An override layer references a rule identifier that was never registered
    #[error("override layer references unknown rule '{0}'")]
    UnknownRule(RuleId),

    /// Invalid configuration value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rule definition errors raised at load time
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid regex pattern in a rule's options
    #[error("invalid regex pattern for rule '{rule}': {message}")]
    InvalidRegex { rule: RuleId, message: String },

    /// Structurally invalid options for a rule
    #[error("invalid options for rule '{rule}': {message}")]
    InvalidOptions { rule: RuleId, message: String },
}

/// Top-level error type for Stylegate
#[derive(Debug, thiserror::Error)]
pub enum StylegateError {
    /// Registry error
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
