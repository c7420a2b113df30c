use std::fmt::Write;

use colored::Colorize;

use super::pluralize;
use crate::types::{AuditReport, Violation};

/// Renders the human-readable report.
///
/// Only sections with findings are listed. Colors follow `colored`'s global
/// switch, so callers writing to a file should disable them first.
#[must_use]
pub fn render(report: &AuditReport) -> String {
    let mut out = String::new();

    for failure in &report.parse_failures {
        let _ = writeln!(out, "{} {failure}", "Warning:".yellow());
    }

    let total = report.total_violations();
    if total == 0 {
        let _ = writeln!(out, "{}", "✓ All checks passed!".green());
        return out;
    }

    for (section, violations) in report.sections() {
        if violations.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", format!("⚠ {}", section.title()).yellow().bold());
        for v in violations {
            let _ = writeln!(out, "  {}", describe(v));
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        format!("Found {total} {}", pluralize("violation", total)).red()
    );
    out
}

fn describe(v: &Violation) -> String {
    match v {
        Violation::ActionWithoutUsecase {
            file,
            action_name,
            line,
        } => format!("{file}:{line} - {action_name}"),
        Violation::TaskWithoutUsecase {
            file,
            task_name,
            line,
        } => format!("{file}:{line} - {task_name}"),
        Violation::UsecaseMissingSpec {
            file,
            expected_spec,
        }
        | Violation::TaskMissingSpec {
            file,
            expected_spec,
        } => format!("{file} - {expected_spec}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sections_with_findings() {
        colored::control::set_override(false);
        let report = AuditReport {
            controller_violations: Some(vec![Violation::ActionWithoutUsecase {
                file: "app/controllers/a_controller.rb".into(),
                action_name: "index".into(),
                line: 3,
            }]),
            usecase_violations: Some(Vec::new()),
            rake_spec_violations: Some(vec![Violation::TaskMissingSpec {
                file: "lib/tasks/a.rake".into(),
                expected_spec: "spec/lib/tasks/a_spec.rb".into(),
            }]),
            ..AuditReport::default()
        };
        let text = render(&report);
        assert!(text.contains("⚠ Controllers not calling usecases:"));
        assert!(text.contains("  app/controllers/a_controller.rb:3 - index"));
        assert!(!text.contains("Usecases without specs"));
        assert!(text.contains("  lib/tasks/a.rake - spec/lib/tasks/a_spec.rb"));
        assert!(text.contains("Found 2 violations"));
    }

    #[test]
    fn parse_failures_are_listed_once() {
        colored::control::set_override(false);
        let report = AuditReport {
            controller_violations: Some(Vec::new()),
            parse_failures: vec![crate::analysis::ast::ParseError {
                path: "app/controllers/broken_controller.rb".into(),
                line: 2,
                message: "unexpected syntax".into(),
            }],
            ..AuditReport::default()
        };
        let text = render(&report);
        assert_eq!(text.matches("Warning:").count(), 1);
        assert!(text.contains(
            "Warning: Could not parse app/controllers/broken_controller.rb:2: unexpected syntax"
        ));
    }

    #[test]
    fn clean_report() {
        colored::control::set_override(false);
        let report = AuditReport {
            controller_violations: Some(Vec::new()),
            ..AuditReport::default()
        };
        assert!(render(&report).contains("All checks passed!"));
    }
}
