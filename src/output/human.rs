#![forbid(unsafe_code)]

//! Human-readable violation output
//!
//! Violations are written to stderr in `file:line:col severity rule message`
//! form, followed by a summary line. Severity labels are colored when the
//! terminal supports it.

use crate::rules::Violation;
use crate::types::Severity;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Formats violations for terminal consumption
pub struct HumanFormatter {
    color: ColorChoice,
}

impl HumanFormatter {
    /// Creates a formatter with the given color choice
    pub fn new(color: ColorChoice) -> Self {
        Self { color }
    }

    /// Writes the violation report and summary to stderr
    pub fn write_report(&self, violations: &[Violation]) -> std::io::Result<()> {
        let mut stream = StandardStream::stderr(self.color);

        for violation in violations {
            write!(
                stream,
                "{}:{}:{} ",
                violation.file.display(),
                violation.line,
                violation.column
            )?;

            stream.set_color(ColorSpec::new().set_fg(Some(severity_color(violation.severity))).set_bold(true))?;
            write!(stream, "{}", violation.severity)?;
            stream.reset()?;

            writeln!(
                stream,
                " {} {}",
                violation.rule_id.as_str(),
                violation.message
            )?;
        }

        if !violations.is_empty() {
            writeln!(stream)?;
        }
        writeln!(stream, "{}", summary_line(violations))?;

        Ok(())
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Off => Color::White,
    }
}

/// Builds the one-line summary for a violation list
fn summary_line(violations: &[Violation]) -> String {
    let errors = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .count();
    let warnings = violations
        .iter()
        .filter(|v| v.severity == Severity::Warn)
        .count();

    if errors == 0 && warnings == 0 {
        "No violations found.".to_string()
    } else {
        format!(
            "Found {} error(s) and {} warning(s) in total.",
            errors, warnings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleId;
    use std::path::PathBuf;

    fn violation(severity: Severity) -> Violation {
        Violation {
            rule_id: RuleId::new("semi").unwrap(),
            severity,
            file: PathBuf::from("app.ts"),
            line: 1,
            column: 1,
            message: "missing semicolon".to_string(),
        }
    }

    #[test]
    fn test_summary_counts() {
        let violations = vec![
            violation(Severity::Error),
            violation(Severity::Error),
            violation(Severity::Warn),
        ];
        assert_eq!(
            summary_line(&violations),
            "Found 2 error(s) and 1 warning(s) in total."
        );
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summary_line(&[]), "No violations found.");
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color(Severity::Error), Color::Red);
        assert_eq!(severity_color(Severity::Warn), Color::Yellow);
    }
}
