#![forbid(unsafe_code)]

//! The Rule catalog entry, the predicate contract, and violation types

use crate::types::{RuleId, RuleOptions, Severity};
use std::path::{Path, PathBuf};

/// A named style constraint with a default severity and optional parameters
///
/// Rules are immutable once defined. The default severity and options can be
/// overridden per file path by the configuration resolver; the rationale is
/// informational and survives resolution unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    id: RuleId,
    severity: Severity,
    options: RuleOptions,
    rationale: String,
}

impl Rule {
    /// Creates a rule with the given identifier and default severity
    pub fn new(id: RuleId, severity: Severity) -> Self {
        Self {
            id,
            severity,
            options: RuleOptions::new(),
            rationale: String::new(),
        }
    }

    /// Attaches structured options to the rule
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }

    /// Attaches a human-readable rationale to the rule
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    /// Returns the unique identifier for this rule
    pub fn id(&self) -> &RuleId {
        &self.id
    }

    /// Returns the default severity of this rule
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the structured options attached to this rule
    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Returns the human-readable rationale for this rule
    pub fn rationale(&self) -> &str {
        &self.rationale
    }
}

/// Context provided to a rule predicate when it executes
#[derive(Debug)]
pub struct CheckContext<'a> {
    /// Path to the file being analyzed
    pub file_path: &'a Path,

    /// Full text content of the file
    pub content: &'a str,

    /// Effective options for the rule at this path
    pub options: &'a RuleOptions,
}

/// A single location reported by a rule predicate
///
/// Findings carry no severity; the evaluator attaches the effective severity
/// from the resolved rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Line number where the finding starts (1-indexed)
    pub line: u32,

    /// Column number where the finding starts (1-indexed)
    pub column: u32,

    /// Human-readable message describing the finding
    pub message: String,
}

/// Internal failure of a single rule predicate
///
/// A predicate failure never aborts the evaluation run; it degrades to one
/// reported violation for the failing rule.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CheckFailure(pub String);

/// Predicate contract toward the external rule engine
///
/// Implementations analyze one source unit and report findings. The trait is
/// `Send + Sync` to enable parallel evaluation across files.
pub trait RuleCheck: Send + Sync {
    /// Applies the predicate to the provided context
    ///
    /// Returns all findings in the file, or a failure if the predicate
    /// itself cannot run.
    fn check(&self, ctx: &CheckContext) -> Result<Vec<Finding>, CheckFailure>;
}

/// One reported instance of a source unit failing an enabled rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// ID of the rule that produced this violation
    pub rule_id: RuleId,

    /// Effective severity of the rule at this path
    pub severity: Severity,

    /// File path where the violation was found
    pub file: PathBuf,

    /// Line number where the violation starts (1-indexed)
    pub line: u32,

    /// Column number where the violation starts (1-indexed)
    pub column: u32,

    /// Human-readable message describing the violation
    pub message: String,
}

impl Violation {
    /// Builds the violation reported when a rule predicate fails internally
    ///
    /// The failure is pinned to the failing rule only and carries `error`
    /// severity so a broken predicate cannot pass silently.
    pub fn execution_failure(rule_id: RuleId, file: PathBuf, failure: &CheckFailure) -> Self {
        Self {
            rule_id,
            severity: Severity::Error,
            file,
            line: 1,
            column: 1,
            message: format!("rule execution failed: {}", failure),
        }
    }
}
