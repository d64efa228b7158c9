//! Rule requiring plugin versions to be managed.
//!
//! Plugin counterpart of the dependency version check: explicit plugin
//! versions belong in the plugin management section.
//!
//! # Configuration
//!
//! - `manage_versions`: versions have to be declared in management (default: true)
//! - `allow_unmanaged_project_versions`: permit `${project.version}` and
//!   `${version}` outside management (default: true)

use pom_pedant_core::{
    to_lines, ErrorReport, PluginPredicate, PolicyBreach, ProjectModel, Rule, RuleConfig, RuleId,
};

const VERSIONS_TITLE: &str = "Plugin versions have to be declared in the management section";

/// Requires plugin versions to live in plugin management.
#[derive(Debug, Clone)]
pub struct PluginConfiguration {
    /// Require versions to be declared in the management section.
    pub manage_versions: bool,
    /// Exempt project-version placeholders from the version check.
    pub allow_unmanaged_project_versions: bool,
}

impl Default for PluginConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginConfiguration {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            manage_versions: true,
            allow_unmanaged_project_versions: true,
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

    /// Binds the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        Self {
            manage_versions: config.get_bool("manage_versions", true),
            allow_unmanaged_project_versions: config
                .get_bool("allow_unmanaged_project_versions", true),
        }
    }
}

impl Rule for PluginConfiguration {
    fn id(&self) -> RuleId {
        RuleId::PluginConfiguration
    }

    fn enforce(
        &self,
        project: &ProjectModel,
        report: &mut ErrorReport,
    ) -> Result<(), PolicyBreach> {
        if !self.manage_versions {
            return Ok(());
        }

        let mut versioned = PluginPredicate::HasVersion.select(&project.plugins);
        if self.allow_unmanaged_project_versions {
            versioned.retain(|p| PluginPredicate::NonProjectVersion.eval(p));
        }

        if !versioned.is_empty() {
            report.add_group(VERSIONS_TITLE, to_lines(&versioned));
        }
        Ok(())
    }
}
