//! Integration tests for the evaluation engine
//!
//! These tests exercise the complete pipeline on real directories:
//! - File discovery with FileWalker
//! - Per-file rule-set resolution with ConfigResolver
//! - Parallel evaluation with EvaluationEngine
//! - Deterministic, sorted violation output

use std::fs;
use std::path::{Path, PathBuf};
use stylegate::config::{Config, ConfigResolver};
use stylegate::engine::{EvaluationEngine, Evaluator, FileWalker};
use stylegate::types::{GlobPattern, RuleId, Severity};
use tempfile::TempDir;

fn id(s: &str) -> RuleId {
    RuleId::new(s).unwrap()
}

/// Create a file under `dir`, creating parent directories as needed
fn create_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Build the full pipeline (registry, resolver, evaluator) from TOML text
fn pipeline_for(toml: &str) -> EvaluationEngine {
    let config = Config::parse(toml).expect("config should parse");
    let registry = config.build_registry().expect("registry should build");
    let resolver =
        ConfigResolver::new(&registry, config.override_decls()).expect("resolver should build");
    let evaluator = Evaluator::from_registry(&registry).expect("evaluator should build");
    EvaluationEngine::new(resolver, evaluator)
}

#[test]
fn test_walker_discovers_only_included_files() {
    let temp_dir = TempDir::new().unwrap();
    create_file(temp_dir.path(), "src/app.ts", "let x = 1;\n");
    create_file(temp_dir.path(), "src/util.ts", "let y = 2;\n");
    create_file(temp_dir.path(), "README.md", "# readme\n");

    let walker = FileWalker::new(
        temp_dir.path(),
        &[GlobPattern::new("**/*.ts")],
        &[],
    )
    .unwrap();
    let mut files: Vec<PathBuf> = walker.walk().collect::<Result<_, _>>().unwrap();
    files.sort();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "ts")));
}

#[test]
fn test_walker_exclude_takes_precedence() {
    let temp_dir = TempDir::new().unwrap();
    create_file(temp_dir.path(), "src/app.ts", "let x = 1;\n");
    create_file(temp_dir.path(), "vendor/lib.ts", "let y = 2;\n");

    let walker = FileWalker::new(
        temp_dir.path(),
        &[GlobPattern::new("**/*.ts")],
        &[GlobPattern::new("**/vendor/**")],
    )
    .unwrap();
    let files: Vec<PathBuf> = walker.walk().collect::<Result<_, _>>().unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/app.ts"));
}

#[test]
fn test_engine_reports_violations_with_positions() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_file(
        temp_dir.path(),
        "app.ts",
        "const a = 1;\nconsole.log(a);\n",
    );

    let engine = pipeline_for(
        r#"
[stylegate]
version = "1"

[rules.no-console]
severity = "error"

[rules.no-console.options]
pattern = "console\\.log"
message = "no console output"
"#,
    );

    let result = engine.run(vec![app.clone()]);
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);

    let violation = &result.violations[0];
    assert_eq!(violation.rule_id, id("no-console"));
    assert_eq!(violation.severity, Severity::Error);
    assert_eq!(violation.file, app);
    assert_eq!(violation.line, 2);
    assert_eq!(violation.column, 1);
    assert_eq!(violation.message, "no console output");
}

#[test]
fn test_engine_applies_per_file_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_file(temp_dir.path(), "src/app.ts", "console.log(1);\n");
    let config_file = create_file(temp_dir.path(), "vite.config.ts", "console.log(2);\n");

    let engine = pipeline_for(
        r#"
[stylegate]
version = "1"

[rules.no-console]
severity = "error"

[rules.no-console.options]
pattern = "console\\."

[[overrides]]
pattern = "**/*.config.ts"

[overrides.rules]
no-console = "off"
"#,
    );

    let result = engine.run(vec![app.clone(), config_file]);

    // Only the non-config file violates; the override silences the other.
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].file, app);
}

#[test]
fn test_engine_output_is_sorted_across_files() {
    let temp_dir = TempDir::new().unwrap();
    let a = create_file(temp_dir.path(), "a.ts", "// TODO one\nok\n// TODO two\n");
    let b = create_file(temp_dir.path(), "b.ts", "// TODO three\n");

    let engine = pipeline_for(
        r#"
[stylegate]
version = "1"

[rules.no-todo]
severity = "warn"

[rules.no-todo.options]
pattern = "TODO"
"#,
    );

    // Hand the files over in reverse order; output order must not care.
    let result = engine.run(vec![b.clone(), a.clone()]);

    let positions: Vec<(&PathBuf, u32)> = result
        .violations
        .iter()
        .map(|v| (&v.file, v.line))
        .collect();
    assert_eq!(positions, vec![(&a, 1), (&a, 3), (&b, 1)]);
}

#[test]
fn test_multiple_rules_on_one_file() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_file(
        temp_dir.path(),
        "app.ts",
        "console.log('x');\nvar y = 1;\n",
    );

    let engine = pipeline_for(
        r#"
[stylegate]
version = "1"

[rules.no-console]
severity = "error"

[rules.no-console.options]
pattern = "console\\."

[rules.no-var]
severity = "warn"

[rules.no-var.options]
pattern = "\\bvar\\b"
"#,
    );

    let result = engine.run(vec![app]);
    assert_eq!(result.violations.len(), 2);
    assert_eq!(result.violations[0].rule_id, id("no-console"));
    assert_eq!(result.violations[1].rule_id, id("no-var"));
}

#[test]
fn test_rules_without_patterns_do_not_block_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_file(temp_dir.path(), "app.ts", "console.log(1);\n");

    // prefer-interface has no local predicate; it is carried in the catalog
    // but contributes no findings here.
    let engine = pipeline_for(
        r#"
[stylegate]
version = "1"

[rules]
prefer-interface = "error"

[rules.no-console]
severity = "warn"

[rules.no-console.options]
pattern = "console\\."
"#,
    );

    let result = engine.run(vec![app]);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].rule_id, id("no-console"));
}

#[test]
fn test_walker_and_engine_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    create_file(temp_dir.path(), "src/one.ts", "// TODO a\n");
    create_file(temp_dir.path(), "src/two.ts", "clean\n");
    create_file(temp_dir.path(), "docs/note.md", "TODO not matched\n");

    let engine = pipeline_for(
        r#"
[stylegate]
version = "1"

[rules.no-todo]
severity = "warn"

[rules.no-todo.options]
pattern = "TODO"
"#,
    );

    let walker = FileWalker::new(
        temp_dir.path(),
        &[GlobPattern::new("**/*.ts")],
        &[],
    )
    .unwrap();
    let files: Vec<PathBuf> = walker.walk().collect::<Result<_, _>>().unwrap();
    let result = engine.run(files);

    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].file.ends_with("src/one.ts"));
}
