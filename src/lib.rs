#![forbid(unsafe_code)]

//! Stylegate: layered style-rule enforcement
//!
//! Stylegate holds a closed catalog of named style rules, resolves the
//! effective severity for any file path by layering glob-scoped overrides
//! onto a base configuration, and evaluates enabled rules against source
//! files.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, RegistryError, RuleError, StylegateError};

// Re-export core domain types for convenient access
pub use types::{GlobPattern, RuleId, RuleOptions, Severity};
