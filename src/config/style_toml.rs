//! Parsing and validation for stylegate.toml configuration files
//!
//! The configuration file supplies the rule catalog (the base layer) and the
//! glob-scoped override layers. Declaration order of `[[overrides]]` sections
//! is preserved; it decides which layer wins on conflicting identifiers.

use crate::config::resolver::{OverrideDecl, OverridePatch};
use crate::error::{ConfigError, RegistryError};
use crate::rules::{Rule, RuleRegistry};
use crate::types::{GlobPattern, RuleId, RuleOptions, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main configuration struct for stylegate.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Stylegate metadata
    pub stylegate: StylegateMeta,

    /// File discovery configuration
    #[serde(default)]
    pub files: FilesConfig,

    /// The rule catalog: identifier to default severity/options/rationale
    #[serde(default)]
    pub rules: BTreeMap<RuleId, RuleValue>,

    /// Override layers, applied in declaration order
    #[serde(default)]
    pub overrides: Vec<OverrideSection>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.stylegate.version != "1" {
            return Err(ConfigError::InvalidValue {
                field: "stylegate.version".to_string(),
                message: format!(
                    "unsupported configuration version '{}', expected '1'",
                    self.stylegate.version
                ),
            });
        }

        for pattern in self.files.include.iter().chain(&self.files.exclude) {
            compile_check(pattern)?;
        }

        for section in &self.overrides {
            compile_check(&section.pattern)?;
        }

        Ok(())
    }

    /// Builds the rule registry from the `[rules]` catalog
    ///
    /// Rules are registered in the catalog's (sorted) key order, which is
    /// deterministic across runs.
    pub fn build_registry(&self) -> Result<RuleRegistry, RegistryError> {
        let mut registry = RuleRegistry::new();
        for (id, value) in &self.rules {
            registry.register(value.to_rule(id.clone()))?;
        }
        Ok(registry)
    }

    /// Extracts the override layers in declaration order
    pub fn override_decls(&self) -> Vec<OverrideDecl> {
        self.overrides
            .iter()
            .map(|section| OverrideDecl {
                pattern: section.pattern.clone(),
                rules: section
                    .rules
                    .iter()
                    .map(|(id, value)| (id.clone(), value.to_patch()))
                    .collect(),
            })
            .collect()
    }
}

/// Compile a glob pattern purely to validate it
fn compile_check(pattern: &GlobPattern) -> Result<(), ConfigError> {
    globset::Glob::new(pattern.as_str())
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidGlob {
            pattern: pattern.as_str().to_string(),
            source: e,
        })
}

/// Stylegate metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylegateMeta {
    /// Configuration version (must be "1")
    pub version: String,
}

/// File discovery section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// File patterns to include
    #[serde(default = "default_include")]
    pub include: Vec<GlobPattern>,

    /// File patterns to exclude
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: Vec::new(),
        }
    }
}

fn default_include() -> Vec<GlobPattern> {
    vec![GlobPattern::new("**/*")]
}

/// A catalog entry: bare severity string or a settings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Bare severity, e.g. `semi = "error"`
    Severity(Severity),
    /// Full settings table
    Detailed(RuleDetail),
}

impl RuleValue {
    fn to_rule(&self, id: RuleId) -> Rule {
        match self {
            RuleValue::Severity(severity) => Rule::new(id, *severity),
            RuleValue::Detailed(detail) => Rule::new(id, detail.severity)
                .with_options(detail.options.clone())
                .with_rationale(detail.rationale.clone()),
        }
    }
}

/// Full settings for a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDetail {
    /// Default severity for this rule
    pub severity: Severity,

    /// Structured options passed to the rule's predicate
    #[serde(default)]
    pub options: RuleOptions,

    /// Human-readable rationale
    #[serde(default)]
    pub rationale: String,
}

/// One `[[overrides]]` section: a glob pattern plus a partial rule mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideSection {
    /// Glob pattern scoping this layer
    pub pattern: GlobPattern,

    /// Partial rule mapping (only the rules this layer changes)
    #[serde(default)]
    pub rules: BTreeMap<RuleId, OverrideValue>,
}

/// An override entry: bare severity string or a partial settings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    /// Bare severity, e.g. `no-unused-vars = "off"`
    Severity(Severity),
    /// Partial settings table
    Detailed(OverrideDetail),
}

impl OverrideValue {
    fn to_patch(&self) -> OverridePatch {
        match self {
            OverrideValue::Severity(severity) => OverridePatch {
                severity: Some(*severity),
                options: None,
            },
            OverrideValue::Detailed(detail) => OverridePatch {
                severity: detail.severity,
                options: detail.options.clone(),
            },
        }
    }
}

/// Partial settings for an override entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideDetail {
    /// Severity override, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Options replacement, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RuleOptions>,
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorOption::Auto,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
[stylegate]
version = "1"

[files]
include = ["src/**", "*.ts"]
exclude = ["**/generated/**", "**/vendor/**"]

[rules]
no-explicit-any = "error"
semi = "error"
no-unused-vars = { severity = "error", rationale = "dead bindings hide bugs" }
max-len = { severity = "warn", options = { limit = 100 } }
no-console = "off"

[[overrides]]
pattern = "*.config.ts"

[overrides.rules]
no-unused-vars = "off"

[[overrides]]
pattern = "*.test.ts"

[overrides.rules]
max-len = { severity = "off" }

[output]
format = "human"
color = "auto"
"#;

    fn id(s: &str) -> RuleId {
        RuleId::new(s).unwrap()
    }

    #[test]
    fn test_valid_config_parsing() {
        let config = Config::parse(VALID_CONFIG).unwrap();

        assert_eq!(config.stylegate.version, "1");
        assert_eq!(config.files.include.len(), 2);
        assert_eq!(config.files.exclude.len(), 2);
        assert_eq!(config.rules.len(), 5);

        assert_eq!(
            config.rules.get(&id("semi")),
            Some(&RuleValue::Severity(Severity::Error))
        );
        assert_eq!(
            config.rules.get(&id("no-console")),
            Some(&RuleValue::Severity(Severity::Off))
        );

        match config.rules.get(&id("max-len")) {
            Some(RuleValue::Detailed(detail)) => {
                assert_eq!(detail.severity, Severity::Warn);
                assert_eq!(detail.options.get("limit"), Some(&toml::Value::Integer(100)));
            }
            other => panic!("expected settings for max-len, got {:?}", other),
        }

        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.overrides[0].pattern.as_str(), "*.config.ts");
        assert_eq!(config.output.format, OutputFormat::Human);
        assert_eq!(config.output.color, ColorOption::Auto);
    }

    #[test]
    fn test_minimal_config() {
        let minimal = r#"
[stylegate]
version = "1"

[rules]
semi = "error"
"#;

        let config = Config::parse(minimal).unwrap();
        assert_eq!(config.files.include.len(), 1); // Default "**/*"
        assert_eq!(config.files.exclude.len(), 0);
        assert!(config.overrides.is_empty());
        assert_eq!(config.output.format, OutputFormat::Human);
    }

    #[test]
    fn test_invalid_version() {
        let invalid = r#"
[stylegate]
version = "2"

[rules]
semi = "error"
"#;

        let err = Config::parse(invalid).unwrap_err();
        assert!(err.to_string().contains("unsupported configuration version"));
    }

    #[test]
    fn test_missing_version() {
        let invalid = r#"
[stylegate]

[rules]
semi = "error"
"#;

        assert!(Config::parse(invalid).is_err());
    }

    #[test]
    fn test_invalid_severity_string() {
        let invalid = r#"
[stylegate]
version = "1"

[rules]
semi = "critical"
"#;

        assert!(Config::parse(invalid).is_err());
    }

    #[test]
    fn test_invalid_include_glob() {
        let invalid = r#"
[stylegate]
version = "1"

[files]
include = ["[invalid"]

[rules]
semi = "error"
"#;

        let err = Config::parse(invalid).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlob { .. }));
        assert!(err.to_string().contains("[invalid"));
    }

    #[test]
    fn test_invalid_override_glob() {
        let invalid = r#"
[stylegate]
version = "1"

[rules]
semi = "error"

[[overrides]]
pattern = "[invalid"

[overrides.rules]
semi = "off"
"#;

        let err = Config::parse(invalid).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlob { .. }));
    }

    #[test]
    fn test_invalid_rule_id_rejected() {
        let invalid = r#"
[stylegate]
version = "1"

[rules]
"bad rule id" = "error"
"#;

        assert!(Config::parse(invalid).is_err());
    }

    #[test]
    fn test_build_registry() {
        let config = Config::parse(VALID_CONFIG).unwrap();
        let registry = config.build_registry().unwrap();

        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.get(&id("semi")).unwrap().severity(),
            Severity::Error
        );
        assert_eq!(
            registry.get(&id("no-console")).unwrap().severity(),
            Severity::Off
        );
        assert_eq!(
            registry.get(&id("no-unused-vars")).unwrap().rationale(),
            "dead bindings hide bugs"
        );
    }

    #[test]
    fn test_registry_order_is_deterministic() {
        let config = Config::parse(VALID_CONFIG).unwrap();
        let first: Vec<String> = config
            .build_registry()
            .unwrap()
            .all()
            .map(|r| r.id().to_string())
            .collect();
        let second: Vec<String> = config
            .build_registry()
            .unwrap()
            .all()
            .map(|r| r.id().to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_override_decls_preserve_declaration_order() {
        let config = Config::parse(VALID_CONFIG).unwrap();
        let decls = config.override_decls();

        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].pattern.as_str(), "*.config.ts");
        assert_eq!(decls[1].pattern.as_str(), "*.test.ts");

        let (rule_id, patch) = &decls[0].rules[0];
        assert_eq!(rule_id.as_str(), "no-unused-vars");
        assert_eq!(patch.severity, Some(Severity::Off));
        assert!(patch.options.is_none());
    }

    #[test]
    fn test_override_with_options_only() {
        let config_str = r#"
[stylegate]
version = "1"

[rules]
max-len = { severity = "warn", options = { limit = 80 } }

[[overrides]]
pattern = "*.test.ts"

[overrides.rules]
max-len = { options = { limit = 200 } }
"#;

        let config = Config::parse(config_str).unwrap();
        let decls = config.override_decls();
        let (_, patch) = &decls[0].rules[0];
        assert!(patch.severity.is_none());
        assert_eq!(
            patch.options.as_ref().unwrap().get("limit"),
            Some(&toml::Value::Integer(200))
        );
    }

    #[test]
    fn test_jsonl_output_format() {
        let config_str = r#"
[stylegate]
version = "1"

[rules]
semi = "error"

[output]
format = "jsonl"
color = "never"
"#;

        let config = Config::parse(config_str).unwrap();
        assert_eq!(config.output.format, OutputFormat::Jsonl);
        assert_eq!(config.output.color, ColorOption::Never);
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::parse(VALID_CONFIG).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized = Config::parse(&serialized).unwrap();

        assert_eq!(config.rules, deserialized.rules);
        assert_eq!(config.overrides, deserialized.overrides);
        assert_eq!(config.output, deserialized.output);
    }

    #[test]
    fn test_empty_rules_table_is_allowed() {
        let config_str = r#"
[stylegate]
version = "1"
"#;

        let config = Config::parse(config_str).unwrap();
        assert!(config.rules.is_empty());
        assert!(config.build_registry().unwrap().is_empty());
    }
}
