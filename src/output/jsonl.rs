#![forbid(unsafe_code)]

//! JSONL violation output
//!
//! One JSON object per line per violation, written to stdout. This is the
//! machine-readable surface for editor integrations and CI post-processing.

use crate::rules::Violation;
use serde::Serialize;

/// JSONL output structure for a single violation
#[derive(Debug, Serialize)]
struct JsonlViolation<'a> {
    rule_id: &'a str,
    severity: &'a str,
    file: String,
    line: u32,
    column: u32,
    message: &'a str,
}

impl<'a> From<&'a Violation> for JsonlViolation<'a> {
    fn from(violation: &'a Violation) -> Self {
        Self {
            rule_id: violation.rule_id.as_str(),
            severity: violation.severity.as_str(),
            file: violation.file.display().to_string(),
            line: violation.line,
            column: violation.column,
            message: &violation.message,
        }
    }
}

/// Formats violations as JSON Lines
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JSONL formatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Formats a violation list, one JSON object per line
    pub fn format(&self, violations: &[Violation]) -> String {
        let mut output = String::new();
        for violation in violations {
            if let Ok(json) = serde_json::to_string(&JsonlViolation::from(violation)) {
                output.push_str(&json);
                output.push('\n');
            }
        }
        output
    }

    /// Writes the formatted output to stdout
    pub fn write_to_stdout(&self, violations: &[Violation]) {
        print!("{}", self.format(violations));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
