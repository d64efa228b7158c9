//! Check command implementation.

use anyhow::{Context, Result};
use pom_pedant_core::{Checker, CheckerError, Config, RuleId};
use pom_pedant_rules::{configured_rules, PolicyRule};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = match source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    // Bind rules eagerly so a malformed coordinate list fails here,
    // before any model document is read.
    let mut rules = configured_rules(&config).context("Failed to bind rules")?;
    if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        rules = filter_rules(rules, &names);
    }

    let mut builder = Checker::builder().root(path).config(config);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    for rule in rules {
        builder = builder.rule_box(rule.into_rule_box());
    }

    let checker = builder.build().context("Failed to build checker")?;

    tracing::info!("Checking {:?} with {} rule(s)", path, checker.rule_count());

    match checker.check() {
        Ok(result) => {
            super::output::print(&result, format)?;

            // Exit with error code if there are violations
            if result.has_errors() {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(CheckerError::Breach(breach)) => {
            eprintln!("{:?}", miette::Report::new(breach));
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Check failed"),
    }
}

/// Keeps only the rules named by the filter, warning on unknown names.
fn filter_rules(rules: Vec<PolicyRule>, names: &[&str]) -> Vec<PolicyRule> {
    for name in names {
        let known = RuleId::ALL
            .iter()
            .any(|id| id.name() == *name || id.code().eq_ignore_ascii_case(name));
        if !known {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    rules
        .into_iter()
        .filter(|rule| {
            let id = rule.id();
            names
                .iter()
                .any(|name| id.name() == *name || id.code().eq_ignore_ascii_case(name))
        })
        .collect()
}
