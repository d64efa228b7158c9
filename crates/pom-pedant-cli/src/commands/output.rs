//! Shared output formatting for check results.

use anyhow::Result;
use pom_pedant_core::CheckResult;

use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(result: &CheckResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &CheckResult) {
    for report in &result.reports {
        println!(
            "{} \x1b[1m{}\x1b[0m",
            report.rule.code(),
            report.rule.name()
        );
        for group in &report.groups {
            println!("  \x1b[31m{}\x1b[0m:", group.title);
            for entry in &group.entries {
                println!("  - {entry}");
            }
        }
        println!();
    }

    let summary_color = if result.has_errors() {
        "\x1b[31m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} violation group(s) in {} project(s)\x1b[0m",
        summary_color,
        result.group_count(),
        result.projects_checked
    );
}

fn print_json(result: &CheckResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &CheckResult) {
    for report in &result.reports {
        for group in &report.groups {
            for entry in &group.entries {
                println!(
                    "{} [{}] {}: {entry}",
                    report.rule.name(),
                    report.rule.code(),
                    group.title,
                );
            }
        }
    }
}
