//! Rule sets and configuration binding.

use crate::{
    DependencyConfiguration, DependencyManagementLocation, PluginConfiguration,
    PluginManagementLocation, PolicyRule,
};
use pom_pedant_core::{Config, ConfigError, RuleId};

/// Returns the default rule set.
///
/// Only the advisory configuration rules are included: the location
/// rules need an explicit allow-set to be meaningful, so they join the
/// set through configuration (see [`configured_rules`]).
#[must_use]
pub fn default_rules() -> Vec<PolicyRule> {
    vec![
        DependencyConfiguration::new().into(),
        PluginConfiguration::new().into(),
    ]
}

/// Returns one instance of every policy family, for listings.
#[must_use]
pub fn all_rules() -> Vec<PolicyRule> {
    vec![
        DependencyConfiguration::new().into(),
        DependencyManagementLocation::default().into(),
        PluginConfiguration::new().into(),
        PluginManagementLocation::default().into(),
    ]
}

/// Binds the full rule set from a configuration.
///
/// Advisory rules are always present, bound from their sections when
/// configured. Location rules participate only when an `allowed_projects`
/// option names their allow-set. The result is ordered fatal-first so a
/// structural breach surfaces before advisory line items.
///
/// # Errors
///
/// Returns an error when a coordinate list in the configuration is
/// malformed; binding fails before any project model is evaluated.
pub fn configured_rules(config: &Config) -> Result<Vec<PolicyRule>, ConfigError> {
    let mut rules: Vec<PolicyRule> = Vec::new();

    let dependency_configuration = config
        .rules
        .get(RuleId::DependencyConfiguration.name())
        .map_or_else(DependencyConfiguration::new, DependencyConfiguration::from_config);
    rules.push(dependency_configuration.into());

    let plugin_configuration = config
        .rules
        .get(RuleId::PluginConfiguration.name())
        .map_or_else(PluginConfiguration::new, PluginConfiguration::from_config);
    rules.push(plugin_configuration.into());

    if let Some(rule_config) = config.rules.get(RuleId::DependencyManagementLocation.name()) {
        if rule_config.get_artifact_set("allowed_projects")?.is_some() {
            rules.push(DependencyManagementLocation::from_config(rule_config)?.into());
        } else {
            tracing::debug!(
                "No allow-set configured for {}, rule not activated",
                RuleId::DependencyManagementLocation.name()
            );
        }
    }

    if let Some(rule_config) = config.rules.get(RuleId::PluginManagementLocation.name()) {
        if rule_config.get_artifact_set("allowed_projects")?.is_some() {
            rules.push(PluginManagementLocation::from_config(rule_config)?.into());
        }
    }

    rules.sort_by_key(PolicyRule::precedence);
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_advisory_only() {
        assert!(default_rules().iter().all(|r| !r.is_fatal()));
    }

    #[test]
    fn all_rules_covers_every_family() {
        let ids: Vec<RuleId> = all_rules().iter().map(PolicyRule::id).collect();
        assert_eq!(ids.len(), RuleId::ALL.len());
        for id in RuleId::ALL {
            assert!(ids.contains(&id), "missing {id}");
        }
    }

    #[test]
    fn configured_rules_defaults_to_advisory_set() {
        let rules = configured_rules(&Config::default()).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|r| !r.is_fatal()));
    }

    #[test]
    fn location_rule_joins_when_allow_set_is_configured() {
        let config = Config::parse(
            "[rules.dependency-management-location]\nallowed_projects = \"com.example:parent\"\n",
        )
        .unwrap();

        let rules = configured_rules(&config).unwrap();
        assert_eq!(rules.len(), 3);
        // Fatal rules come first.
        assert!(rules[0].is_fatal());
        assert_eq!(rules[0].id(), RuleId::DependencyManagementLocation);
    }

    #[test]
    fn malformed_allow_set_fails_binding() {
        let config = Config::parse(
            "[rules.plugin-management-location]\nallowed_projects = \"broken\"\n",
        )
        .unwrap();
        assert!(configured_rules(&config).is_err());
    }

    #[test]
    fn advisory_options_are_bound_from_config() {
        let config = Config::parse(
            "[rules.dependency-configuration]\nmanage_exclusions = false\n",
        )
        .unwrap();

        let rules = configured_rules(&config).unwrap();
        let Some(PolicyRule::DependencyConfiguration(rule)) = rules
            .iter()
            .find(|r| r.id() == RuleId::DependencyConfiguration)
        else {
            panic!("dependency-configuration rule missing");
        };
        assert!(!rule.manage_exclusions);
    }
}
