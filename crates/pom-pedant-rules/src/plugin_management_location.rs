//! Rule restricting plugin management to authorized projects.
//!
//! Mirror of the dependency management location rule over the plugin
//! management section: an unauthorized declaration aborts the check.

use pom_pedant_core::{
    Artifact, ConfigError, ErrorReport, ManagementSection, PolicyBreach, ProjectModel, Rule,
    RuleConfig, RuleId,
};
use std::collections::HashSet;

/// Restricts plugin management declarations to an allow-set of projects.
#[derive(Debug, Clone, Default)]
pub struct PluginManagementLocation {
    allowed_projects: HashSet<Artifact>,
}

impl PluginManagementLocation {
    /// Creates a rule permitting exactly the given projects.
    ///
    /// Membership is decided on `groupId:artifactId` alone.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = Artifact>) -> Self {
        Self {
            allowed_projects: allowed.into_iter().map(|a| a.without_version()).collect(),
        }
    }

    /// Adds one project to the allow-set.
    #[must_use]
    pub fn allow(mut self, project: Artifact) -> Self {
        self.allowed_projects.insert(project.without_version());
        self
    }

    /// Binds the rule from its configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error when the `allowed_projects` option contains a
    /// malformed coordinate.
    pub fn from_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        let allowed = config.get_artifact_set("allowed_projects")?.unwrap_or_default();
        Ok(Self::new(allowed))
    }

    fn is_management_allowed(&self, project: &Artifact) -> bool {
        self.allowed_projects.contains(&project.without_version())
    }
}

impl Rule for PluginManagementLocation {
    fn id(&self) -> RuleId {
        RuleId::PluginManagementLocation
    }

    fn enforce(
        &self,
        project: &ProjectModel,
        _report: &mut ErrorReport,
    ) -> Result<(), PolicyBreach> {
        if !project.managed_plugins.is_empty() && !self.is_management_allowed(&project.coordinate)
        {
            return Err(PolicyBreach::unauthorized(
                ManagementSection::Plugins,
                project.coordinate.clone(),
                &self.allowed_projects,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pom_pedant_core::Plugin;

    fn managing_model(artifact_id: &str) -> ProjectModel {
        let mut model = ProjectModel::new(Artifact::new("com.example", artifact_id));
        model
            .managed_plugins
            .push(Plugin::new("g", "managed-plugin", Some("2.0")));
        model
    }

    #[test]
    fn unauthorized_plugin_management_is_fatal() {
        let rule = PluginManagementLocation::new([Artifact::new("com.example", "parent")]);
        let model = managing_model("app");

        let mut report = ErrorReport::new(rule.id());
        let breach = rule.enforce(&model, &mut report).unwrap_err();
        assert!(breach.to_string().contains("plugin management"));
        assert!(!report.has_errors());
    }

    #[test]
    fn authorized_project_passes_silently() {
        let rule = PluginManagementLocation::new([Artifact::new("com.example", "parent")]);
        let model = managing_model("parent");

        let mut report = ErrorReport::new(rule.id());
        assert!(rule.enforce(&model, &mut report).is_ok());
        assert!(!report.has_errors());
    }

    #[test]
    fn project_without_plugin_management_is_never_flagged() {
        let rule = PluginManagementLocation::default();
        let model = ProjectModel::new(Artifact::new("com.example", "app"));

        let mut report = ErrorReport::new(rule.id());
        assert!(rule.enforce(&model, &mut report).is_ok());
    }
}
