//! Rule trait, rule identity, and the fatal policy breach error.

use crate::model::{Artifact, ProjectModel};
use crate::report::ErrorReport;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identity of a policy family.
///
/// Every concrete rule declares exactly one of these; downstream
/// consumers use the identity to select, order, or special-case rules
/// without inspecting the concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Dependency versions and exclusions belong in dependency management.
    DependencyConfiguration,
    /// Only authorized projects may declare dependency management.
    DependencyManagementLocation,
    /// Plugin versions belong in plugin management.
    PluginConfiguration,
    /// Only authorized projects may declare plugin management.
    PluginManagementLocation,
}

impl RuleId {
    /// All policy families, in evaluation-documentation order.
    pub const ALL: [Self; 4] = [
        Self::DependencyConfiguration,
        Self::DependencyManagementLocation,
        Self::PluginConfiguration,
        Self::PluginManagementLocation,
    ];

    /// Returns the rule code (e.g. "PP001").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::DependencyConfiguration => "PP001",
            Self::DependencyManagementLocation => "PP002",
            Self::PluginConfiguration => "PP003",
            Self::PluginManagementLocation => "PP004",
        }
    }

    /// Returns the kebab-case rule name used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DependencyConfiguration => "dependency-configuration",
            Self::DependencyManagementLocation => "dependency-management-location",
            Self::PluginConfiguration => "plugin-configuration",
            Self::PluginManagementLocation => "plugin-management-location",
        }
    }

    /// Returns a brief description of the policy.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::DependencyConfiguration => {
                "Dependency versions and exclusions have to be declared in dependency management"
            }
            Self::DependencyManagementLocation => {
                "Restricts dependency management to authorized projects"
            }
            Self::PluginConfiguration => {
                "Plugin versions have to be declared in plugin management"
            }
            Self::PluginManagementLocation => {
                "Restricts plugin management to authorized projects"
            }
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which management section a fatal breach refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagementSection {
    /// The dependency management section.
    Dependencies,
    /// The plugin management section.
    Plugins,
}

impl fmt::Display for ManagementSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dependencies => write!(f, "dependency management"),
            Self::Plugins => write!(f, "plugin management"),
        }
    }
}

/// A fatal policy breach that aborts the whole check.
///
/// Unlike advisory violations, a breach is not recorded in an
/// [`ErrorReport`]: the remediation (remove the management section
/// entirely) is structurally different from "declare it in the right
/// place", so the rule signals failure directly to its caller.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PolicyBreach {
    /// A project outside the allow-set declared a management section.
    #[error("{project} is not allowed to declare {section}")]
    #[diagnostic(
        code(pom_pedant::management_location),
        help("only these projects may declare {section}: {allowed}")
    )]
    UnauthorizedManagementSection {
        /// The management section that was declared.
        section: ManagementSection,
        /// The offending project's coordinate.
        project: Artifact,
        /// Formatted allow-set, for the diagnostic help text.
        allowed: String,
    },
}

impl PolicyBreach {
    /// Builds a breach for `project` declaring `section` outside `allowed`.
    ///
    /// The allow-set is rendered sorted so the message is deterministic.
    #[must_use]
    pub fn unauthorized(
        section: ManagementSection,
        project: Artifact,
        allowed: &HashSet<Artifact>,
    ) -> Self {
        let mut entries: Vec<String> = allowed.iter().map(ToString::to_string).collect();
        entries.sort();
        let allowed = if entries.is_empty() {
            "(none)".to_string()
        } else {
            entries.join(", ")
        };

        Self::UnauthorizedManagementSection {
            section,
            project,
            allowed,
        }
    }
}

/// A polymorphic policy rule.
///
/// A rule reads one [`ProjectModel`] and either accumulates advisory
/// violations into the given [`ErrorReport`] or returns a fatal
/// [`PolicyBreach`]. Rules own their configuration exclusively and never
/// mutate the model.
pub trait Rule: Send + Sync {
    /// Returns the identity of this rule's policy family.
    fn id(&self) -> RuleId;

    /// Returns a brief description of what this rule enforces.
    fn description(&self) -> &'static str {
        self.id().description()
    }

    /// Evaluates this rule against one project model.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyBreach`] when the model violates a fatal policy;
    /// advisory violations are recorded in `report` instead.
    fn enforce(&self, project: &ProjectModel, report: &mut ErrorReport)
        -> Result<(), PolicyBreach>;
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFlagging;

    impl Rule for AlwaysFlagging {
        fn id(&self) -> RuleId {
            RuleId::DependencyConfiguration
        }

        fn enforce(
            &self,
            _project: &ProjectModel,
            report: &mut ErrorReport,
        ) -> Result<(), PolicyBreach> {
            report.add_group("flagged", vec![]);
            Ok(())
        }
    }

    #[test]
    fn rule_ids_have_stable_codes_and_names() {
        assert_eq!(RuleId::DependencyConfiguration.code(), "PP001");
        assert_eq!(
            RuleId::DependencyManagementLocation.name(),
            "dependency-management-location"
        );
        for id in RuleId::ALL {
            assert!(id.code().starts_with("PP"));
            assert!(!id.description().is_empty());
        }
    }

    #[test]
    fn default_description_comes_from_the_identity() {
        let rule = AlwaysFlagging;
        assert_eq!(
            rule.description(),
            RuleId::DependencyConfiguration.description()
        );
    }

    #[test]
    fn breach_message_names_project_and_section() {
        let allowed: HashSet<Artifact> = [Artifact::new("com.example", "parent")].into();
        let breach = PolicyBreach::unauthorized(
            ManagementSection::Dependencies,
            Artifact::with_version("com.example", "app", "1.0"),
            &allowed,
        );

        let message = breach.to_string();
        assert_eq!(
            message,
            "com.example:app:1.0 is not allowed to declare dependency management"
        );
    }

    #[test]
    fn breach_renders_empty_allow_set_explicitly() {
        let breach = PolicyBreach::unauthorized(
            ManagementSection::Plugins,
            Artifact::new("g", "a"),
            &HashSet::new(),
        );
        let PolicyBreach::UnauthorizedManagementSection { allowed, .. } = &breach;
        assert_eq!(allowed, "(none)");
    }
}
