#![forbid(unsafe_code)]

//! Layered resolution of effective rule sets
//!
//! The resolver owns the base rule set (the registry's defaults) and an
//! ordered list of glob-scoped override layers. Resolving a path starts from
//! the base, then applies every matching layer in declaration order; later
//! matching layers win on shared identifiers regardless of glob specificity.
//!
//! Structural faults (uncompilable globs, overrides naming unregistered
//! rules) fail at construction, before any evaluation begins. After
//! construction, `resolve` is a pure function of the path: no hidden state,
//! no side effects.

use crate::error::ConfigError;
use crate::rules::RuleRegistry;
use crate::types::{GlobPattern, RuleId, RuleOptions, Severity};
use globset::{Glob, GlobMatcher};
use std::collections::HashMap;
use std::path::Path;

/// The effective severity/options pair for one rule at one path
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveRule {
    pub severity: Severity,
    pub options: RuleOptions,
}

/// The fully resolved severity/options mapping applicable to one file
///
/// A RuleSet resolved for any path is total over the registry's identifier
/// space: every registered rule has a defined severity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSet {
    rules: HashMap<RuleId, EffectiveRule>,
}

impl RuleSet {
    /// Returns the effective entry for a rule, if the rule is known
    pub fn get(&self, id: &RuleId) -> Option<&EffectiveRule> {
        self.rules.get(id)
    }

    /// Returns the effective severity for a rule, if the rule is known
    pub fn severity(&self, id: &RuleId) -> Option<Severity> {
        self.rules.get(id).map(|r| r.severity)
    }

    /// Iterates over all entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (&RuleId, &EffectiveRule)> {
        self.rules.iter()
    }

    /// Iterates over entries whose effective severity is not `off`
    pub fn enabled(&self) -> impl Iterator<Item = (&RuleId, &EffectiveRule)> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule.severity != Severity::Off)
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no entries
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The partial change one override layer makes to a single rule
///
/// `None` fields inherit from the prior layer unchanged. Options are
/// replaced wholesale, not merged key-by-key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverridePatch {
    pub severity: Option<Severity>,
    pub options: Option<RuleOptions>,
}

/// An uncompiled override layer: one glob pattern plus a partial rule mapping
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideDecl {
    pub pattern: GlobPattern,
    pub rules: Vec<(RuleId, OverridePatch)>,
}

/// An override layer with its glob compiled
#[derive(Debug)]
struct CompiledLayer {
    matcher: GlobMatcher,
    rules: Vec<(RuleId, OverridePatch)>,
}

/// Resolves the effective rule set for a file path
#[derive(Debug)]
pub struct ConfigResolver {
    base: RuleSet,
    layers: Vec<CompiledLayer>,
}

impl ConfigResolver {
    /// Builds a resolver from the registry's defaults and override layers
    ///
    /// Every layer glob is compiled and every referenced rule identifier is
    /// checked against the registry here, so configuration faults surface
    /// before any evaluation begins.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidGlob` naming the pattern that failed to
    /// compile, or `ConfigError::UnknownRule` naming the first identifier an
    /// override references that is absent from the registry.
    pub fn new(registry: &RuleRegistry, layers: Vec<OverrideDecl>) -> Result<Self, ConfigError> {
        let mut base = RuleSet::default();
        for rule in registry.all() {
            base.rules.insert(
                rule.id().clone(),
                EffectiveRule {
                    severity: rule.severity(),
                    options: rule.options().clone(),
                },
            );
        }

        let mut compiled = Vec::with_capacity(layers.len());
        for decl in layers {
            for (id, _) in &decl.rules {
                if !registry.contains(id) {
                    return Err(ConfigError::UnknownRule(id.clone()));
                }
            }

            let matcher = Glob::new(decl.pattern.as_str())
                .map_err(|e| ConfigError::InvalidGlob {
                    pattern: decl.pattern.as_str().to_string(),
                    source: e,
                })?
                .compile_matcher();

            compiled.push(CompiledLayer {
                matcher,
                rules: decl.rules,
            });
        }

        Ok(Self {
            base,
            layers: compiled,
        })
    }

    /// Resolves the effective rule set for the given file path
    ///
    /// Pure and idempotent: identical inputs yield identical rule sets. The
    /// result is total over the registry: identifiers untouched by matching
    /// layers keep the base entry.
    pub fn resolve(&self, path: impl AsRef<Path>) -> RuleSet {
        let path = path.as_ref();
        let mut resolved = self.base.clone();

        for layer in &self.layers {
            if !layer.matcher.is_match(path) {
                continue;
            }
            for (id, patch) in &layer.rules {
                // Constructor guarantees the id is registered, hence present in base
                if let Some(entry) = resolved.rules.get_mut(id) {
                    if let Some(severity) = patch.severity {
                        entry.severity = severity;
                    }
                    if let Some(options) = &patch.options {
                        entry.options = options.clone();
                    }
                }
            }
        }

        resolved
    }

    /// Returns the base rule set (no layers applied)
    pub fn base(&self) -> &RuleSet {
        &self.base
    }
}
