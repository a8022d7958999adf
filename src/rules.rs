#![forbid(unsafe_code)]

//! Rule definitions, registry, and the predicate contract

pub mod regex_check;
pub mod registry;
pub mod rule;

// Re-export core types
pub use regex_check::RegexCheck;
pub use registry::RuleRegistry;
pub use rule::{CheckContext, CheckFailure, Finding, Rule, RuleCheck, Violation};
