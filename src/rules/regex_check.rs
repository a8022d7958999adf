#![forbid(unsafe_code)]

//! Regex-backed rule predicate
//!
//! Rules whose options carry a `pattern` key get a locally runnable predicate
//! that reports every regex match as a finding. This is the built-in bridge
//! across the predicate contract; rules without a `pattern` option are left
//! to the external rule engine.

use crate::error::RuleError;
use crate::rules::{CheckContext, CheckFailure, Finding, Rule, RuleCheck};
use regex::Regex;

/// A predicate that reports every match of a regex pattern
pub struct RegexCheck {
    pattern: Regex,
    message: String,
}

impl std::fmt::Debug for RegexCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexCheck")
            .field("pattern", &self.pattern.as_str())
            .field("message", &self.message)
            .finish()
    }
}

impl RegexCheck {
    /// Builds a RegexCheck from a rule's options, if the rule declares one
    ///
    /// Returns `Ok(None)` when the rule has no `pattern` option (its
    /// predicate lives in the external engine).
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidOptions` if `pattern` or `message` is not a
    /// string, or `RuleError::InvalidRegex` if the pattern does not compile.
    pub fn from_rule(rule: &Rule) -> Result<Option<Self>, RuleError> {
        let Some(pattern_value) = rule.options().get("pattern") else {
            return Ok(None);
        };

        let pattern_str = pattern_value.as_str().ok_or_else(|| RuleError::InvalidOptions {
            rule: rule.id().clone(),
            message: "'pattern' must be a string".to_string(),
        })?;

        let pattern = Regex::new(pattern_str).map_err(|e| RuleError::InvalidRegex {
            rule: rule.id().clone(),
            message: e.to_string(),
        })?;

        let message = match rule.options().get("message") {
            Some(value) => value
                .as_str()
                .ok_or_else(|| RuleError::InvalidOptions {
                    rule: rule.id().clone(),
                    message: "'message' must be a string".to_string(),
                })?
                .to_string(),
            None => format!("disallowed pattern '{}'", pattern_str),
        };

        Ok(Some(Self { pattern, message }))
    }
}

impl RuleCheck for RegexCheck {
    fn check(&self, ctx: &CheckContext) -> Result<Vec<Finding>, CheckFailure> {
        let line_offsets = compute_line_offsets(ctx.content);

        let findings = self
            .pattern
            .find_iter(ctx.content)
            .map(|m| {
                let (line, column) = offset_to_line_col(m.start(), &line_offsets);
                Finding {
                    line,
                    column,
                    message: self.message.clone(),
                }
            })
            .collect();

        Ok(findings)
    }
}

/// Compute line start offsets for efficient line/column conversion
///
/// Returns a vector where each element is the byte offset of the start of a line.
fn compute_line_offsets(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Convert byte offset to line and column numbers (1-indexed)
fn offset_to_line_col(offset: usize, line_offsets: &[usize]) -> (u32, u32) {
    let line_idx = line_offsets
        .partition_point(|&o| o <= offset)
        .saturating_sub(1);

    let line = (line_idx + 1) as u32;
    let col = (offset - line_offsets[line_idx] + 1) as u32;

    (line, col)
}
