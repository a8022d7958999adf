#![forbid(unsafe_code)]

//! Rule evaluation
//!
//! The Evaluator applies every enabled rule's predicate to one source unit.
//! A failing predicate degrades to a single execution-failure violation for
//! that rule only; evaluation of the remaining rules continues. Rules with
//! no locally available predicate are skipped, since their predicates live
//! in the external rule engine and this crate only carries the contract.
//!
//! The EvaluationEngine drives evaluation across many files in parallel with
//! rayon. Each task needs only a resolved rule set value and a read-only
//! reference to the evaluator; there is no cross-task coordination.

use crate::config::{ConfigResolver, RuleSet};
use crate::error::RuleError;
use crate::rules::{CheckContext, RegexCheck, RuleCheck, RuleRegistry, Violation};
use crate::types::RuleId;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Applies rule predicates to a single source unit
#[derive(Default)]
pub struct Evaluator {
    checks: HashMap<RuleId, Box<dyn RuleCheck>>,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("checks", &self.checks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Evaluator {
    /// Creates an evaluator with no predicates
    pub fn new() -> Self {
        Self {
            checks: HashMap::new(),
        }
    }

    /// Builds an evaluator with regex predicates for every rule that
    /// declares a `pattern` option
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if any rule's pattern options are invalid. This is
    /// a load-time fault: it surfaces before any evaluation begins.
    pub fn from_registry(registry: &RuleRegistry) -> Result<Self, RuleError> {
        let mut evaluator = Self::new();
        for rule in registry.all() {
            if let Some(check) = RegexCheck::from_rule(rule)? {
                evaluator.insert_check(rule.id().clone(), Box::new(check));
            }
        }
        Ok(evaluator)
    }

    /// Registers a predicate for a rule, replacing any existing one
    pub fn insert_check(&mut self, id: RuleId, check: Box<dyn RuleCheck>) {
        self.checks.insert(id, check);
    }

    /// Returns true if a predicate is available for this rule
    pub fn has_check(&self, id: &RuleId) -> bool {
        self.checks.contains_key(id)
    }

    /// Evaluates all enabled rules against one source unit
    ///
    /// Violations carry the effective severity from the resolved rule set.
    pub fn evaluate(&self, path: &Path, content: &str, rules: &RuleSet) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (rule_id, effective) in rules.enabled() {
            let Some(check) = self.checks.get(rule_id) else {
                continue;
            };

            let ctx = CheckContext {
                file_path: path,
                content,
                options: &effective.options,
            };

            match check.check(&ctx) {
                Ok(findings) => {
                    violations.extend(findings.into_iter().map(|finding| Violation {
                        rule_id: rule_id.clone(),
                        severity: effective.severity,
                        file: path.to_path_buf(),
                        line: finding.line,
                        column: finding.column,
                        message: finding.message,
                    }));
                }
                Err(failure) => {
                    violations.push(Violation::execution_failure(
                        rule_id.clone(),
                        path.to_path_buf(),
                        &failure,
                    ));
                }
            }
        }

        violations
    }
}

/// Result of evaluating all files
#[derive(Debug)]
pub struct EvaluationResult {
    /// All violations found, sorted by file, line, column, and rule
    pub violations: Vec<Violation>,
    /// Number of files evaluated
    pub files_checked: usize,
}

/// Drives parallel evaluation of many files
pub struct EvaluationEngine {
    resolver: ConfigResolver,
    evaluator: Evaluator,
}

impl EvaluationEngine {
    /// Creates a new engine from a resolver and an evaluator
    pub fn new(resolver: ConfigResolver, evaluator: Evaluator) -> Self {
        Self {
            resolver,
            evaluator,
        }
    }

    /// Evaluates all files in parallel
    ///
    /// Each file gets its own resolved rule set. Unreadable files are
    /// reported to stderr and skipped.
    pub fn run(&self, files: Vec<PathBuf>) -> EvaluationResult {
        let files_checked = files.len();

        let mut violations: Vec<Violation> = files
            .par_iter()
            .flat_map(|path| self.run_file(path))
            .collect();

        // Deterministic output regardless of scheduling
        violations.sort_by(|a, b| {
            (&a.file, a.line, a.column, &a.rule_id).cmp(&(&b.file, b.line, b.column, &b.rule_id))
        });

        EvaluationResult {
            violations,
            files_checked,
        }
    }

    fn run_file(&self, path: &Path) -> Vec<Violation> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: failed to read file {}: {}", path.display(), e);
                return vec![];
            }
        };

        let rules = self.resolver.resolve(path);
        self.evaluator.evaluate(path, &content, &rules)
    }
}
