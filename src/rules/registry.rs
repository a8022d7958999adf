#![forbid(unsafe_code)]

//! Rule registry: the canonical, immutable catalog of known rules
//!
//! The registry is the closed identifier space of the system. Lookups of
//! unregistered identifiers fail fast so configuration typos surface at load
//! time rather than at enforcement time. After initialization the registry is
//! read-only and safe to share across evaluation tasks.

use crate::error::RegistryError;
use crate::rules::Rule;
use crate::types::RuleId;
use std::collections::HashMap;

/// Catalog of registered rules, keyed by their unique RuleId
///
/// Iteration order is registration order and stays stable for the lifetime
/// of the registry.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
    index: HashMap<RuleId, usize>,
}

impl RuleRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers a rule
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateRule` if a rule with the same
    /// identifier is already registered. The failure is atomic: the registry
    /// is left unchanged.
    pub fn register(&mut self, rule: Rule) -> Result<(), RegistryError> {
        if self.index.contains_key(rule.id()) {
            return Err(RegistryError::DuplicateRule(rule.id().clone()));
        }
        self.index.insert(rule.id().clone(), self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    /// Looks up a rule by its identifier
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownRule` if no rule with this identifier
    /// is registered.
    pub fn get(&self, id: &RuleId) -> Result<&Rule, RegistryError> {
        self.index
            .get(id)
            .map(|&i| &self.rules[i])
            .ok_or_else(|| RegistryError::UnknownRule(id.clone()))
    }

    /// Returns true if a rule with this identifier is registered
    pub fn contains(&self, id: &RuleId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over all registered rules in registration order
    ///
    /// The iterator is finite and restartable; its order is stable across
    /// calls within one registry lifetime.
    pub fn all(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Returns the number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
