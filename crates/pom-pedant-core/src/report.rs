//! Violation reporting types.
//!
//! Advisory rules accumulate titled violation groups into an
//! [`ErrorReport`]; one report is created per rule evaluation and
//! discarded after the caller inspects it. Fatal policy breaches never
//! pass through a report, they abort the check (see [`crate::rule`]).

use crate::rule::RuleId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One titled group of violations: a headline and the offending entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationGroup {
    /// Headline describing the violated convention.
    pub title: String,
    /// Formatted offending entities, in declaration order.
    pub entries: Vec<String>,
}

impl fmt::Display for ViolationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        for entry in &self.entries {
            writeln!(f, "- {entry}")?;
        }
        Ok(())
    }
}

/// Accumulates the violations found by one rule evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Identity of the rule that produced this report.
    pub rule: RuleId,
    /// Violation groups, in the order they were recorded.
    pub groups: Vec<ViolationGroup>,
}

impl ErrorReport {
    /// Creates an empty report for the given rule.
    #[must_use]
    pub fn new(rule: RuleId) -> Self {
        Self {
            rule,
            groups: Vec::new(),
        }
    }

    /// Records one violation group.
    pub fn add_group(&mut self, title: impl Into<String>, entries: Vec<String>) {
        self.groups.push(ViolationGroup {
            title: title.into(),
            entries,
        });
    }

    /// Returns `true` iff at least one violation group was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.groups.is_empty()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            write!(f, "{group}")?;
        }
        Ok(())
    }
}

/// Formats entities into report entries, preserving order.
#[must_use]
pub fn to_lines<T: fmt::Display>(entities: &[&T]) -> Vec<String> {
    entities.iter().map(ToString::to_string).collect()
}

/// Aggregated outcome of one check run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CheckResult {
    /// Non-empty reports, one per rule evaluation that found violations.
    pub reports: Vec<ErrorReport>,
    /// Number of project models checked.
    pub projects_checked: usize,
}

impl CheckResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any report recorded a violation.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.reports.iter().any(ErrorReport::has_errors)
    }

    /// Total number of violation groups across all reports.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.reports.iter().map(|r| r.groups.len()).sum()
    }

    /// Formats the full result for terminal output.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut output = String::new();
        for report in &self.reports {
            let _ = writeln!(output, "{} {}", report.rule.code(), report.rule.name());
            let _ = write!(output, "{report}");
            let _ = writeln!(output);
        }

        let _ = writeln!(
            output,
            "Found {} violation group(s) in {} project(s)",
            self.group_count(),
            self.projects_checked
        );

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_starts_empty() {
        let report = ErrorReport::new(RuleId::DependencyConfiguration);
        assert!(!report.has_errors());
        assert!(report.groups.is_empty());
    }

    #[test]
    fn has_errors_after_first_group() {
        let mut report = ErrorReport::new(RuleId::DependencyConfiguration);
        report.add_group("Versions must be managed", vec!["g:a:1.0".to_string()]);
        assert!(report.has_errors());
    }

    #[test]
    fn groups_keep_insertion_order() {
        let mut report = ErrorReport::new(RuleId::DependencyConfiguration);
        report.add_group("first", vec![]);
        report.add_group("second", vec![]);
        let titles: Vec<&str> = report.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn display_renders_title_and_entries() {
        let mut report = ErrorReport::new(RuleId::DependencyConfiguration);
        report.add_group(
            "Dependency versions have to be declared in the management section",
            vec!["g:a:1.0".to_string(), "g:b:2.0".to_string()],
        );

        let rendered = report.to_string();
        assert!(rendered
            .starts_with("Dependency versions have to be declared in the management section:\n"));
        assert!(rendered.contains("- g:a:1.0\n"));
        assert!(rendered.contains("- g:b:2.0\n"));
    }

    #[test]
    fn check_result_counts_groups_across_reports() {
        let mut first = ErrorReport::new(RuleId::DependencyConfiguration);
        first.add_group("a", vec![]);
        first.add_group("b", vec![]);
        let mut second = ErrorReport::new(RuleId::PluginConfiguration);
        second.add_group("c", vec![]);

        let result = CheckResult {
            reports: vec![first, second],
            projects_checked: 2,
        };

        assert!(result.has_errors());
        assert_eq!(result.group_count(), 3);
        assert!(result.format_report().contains("3 violation group(s)"));
    }

    #[test]
    fn empty_result_reports_no_errors() {
        let result = CheckResult::new();
        assert!(!result.has_errors());
        assert_eq!(result.group_count(), 0);
    }
}
