//! Configuration file parsing and layered rule resolution

pub mod resolver;
pub mod style_toml;

pub use resolver::{ConfigResolver, EffectiveRule, OverrideDecl, OverridePatch, RuleSet};
pub use style_toml::{ColorOption, Config, FilesConfig, OutputConfig, OutputFormat};
