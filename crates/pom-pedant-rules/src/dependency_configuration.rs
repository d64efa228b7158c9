//! Rule requiring dependency versions and exclusions to be managed.
//!
//! # Rationale
//!
//! Declaring versions or exclusions at each dependency site duplicates
//! information across modules and lets siblings drift apart. Centralizing
//! them in the dependency management section keeps one authoritative
//! declaration per artifact.
//!
//! # Configuration
//!
//! - `manage_versions`: versions have to be declared in management (default: true)
//! - `allow_unmanaged_project_versions`: permit `${project.version}` and
//!   `${version}` outside management (default: true)
//! - `manage_exclusions`: exclusions have to be declared in management (default: true)

use pom_pedant_core::{
    to_lines, DependencyPredicate, ErrorReport, PolicyBreach, ProjectModel, Rule, RuleConfig,
    RuleId,
};

const VERSIONS_TITLE: &str = "Dependency versions have to be declared in the management section";
const EXCLUSIONS_TITLE: &str =
    "Dependency exclusions have to be declared in the management section";

/// Requires dependency versions and exclusions to live in dependency management.
#[derive(Debug, Clone)]
pub struct DependencyConfiguration {
    /// Require versions to be declared in the management section.
    pub manage_versions: bool,
    /// Exempt project-version placeholders from the version check.
    pub allow_unmanaged_project_versions: bool,
    /// Require exclusions to be declared in the management section.
    pub manage_exclusions: bool,
}

impl Default for DependencyConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyConfiguration {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            manage_versions: true,
            allow_unmanaged_project_versions: true,
            manage_exclusions: true,
        }
    }

    /// Sets whether versions have to be managed.
    #[must_use]
    pub fn manage_versions(mut self, manage: bool) -> Self {
        self.manage_versions = manage;
        self
    }

    /// Sets whether project-version placeholders are exempt.
    #[must_use]
    pub fn allow_unmanaged_project_versions(mut self, allow: bool) -> Self {
        self.allow_unmanaged_project_versions = allow;
        self
    }

    /// Sets whether exclusions have to be managed.
    #[must_use]
    pub fn manage_exclusions(mut self, manage: bool) -> Self {
        self.manage_exclusions = manage;
        self
    }

    /// Binds the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        Self {
            manage_versions: config.get_bool("manage_versions", true),
            allow_unmanaged_project_versions: config
                .get_bool("allow_unmanaged_project_versions", true),
            manage_exclusions: config.get_bool("manage_exclusions", true),
        }
    }

    fn enforce_managed_versions(&self, project: &ProjectModel, report: &mut ErrorReport) {
        let mut versioned = DependencyPredicate::HasVersion.select(&project.dependencies);

        // Drop project-version placeholders if allowed
        if self.allow_unmanaged_project_versions {
            versioned.retain(|d| DependencyPredicate::NonProjectVersion.eval(d));
        }

        if !versioned.is_empty() {
            report.add_group(VERSIONS_TITLE, to_lines(&versioned));
        }
    }

    fn enforce_managed_exclusions(&self, project: &ProjectModel, report: &mut ErrorReport) {
        let excluded = DependencyPredicate::HasExclusions.select(&project.dependencies);

        if !excluded.is_empty() {
            report.add_group(EXCLUSIONS_TITLE, to_lines(&excluded));
        }
    }
}

impl Rule for DependencyConfiguration {
    fn id(&self) -> RuleId {
        RuleId::DependencyConfiguration
    }

    fn enforce(
        &self,
        project: &ProjectModel,
        report: &mut ErrorReport,
    ) -> Result<(), PolicyBreach> {
        if self.manage_versions {
            self.enforce_managed_versions(project, report);
        }
        if self.manage_exclusions {
            self.enforce_managed_exclusions(project, report);
        }
        Ok(())
    }
}
