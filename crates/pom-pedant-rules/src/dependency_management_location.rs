//! Rule restricting dependency management to authorized projects.
//!
//! An unauthorized management declaration is a structural policy breach:
//! the remediation is to remove the section, not to move line items. The
//! rule therefore aborts the check instead of accumulating advisory
//! violations.
//!
//! # Configuration
//!
//! - `allowed_projects`: coordinates (`groupId:artifactId`) of the only
//!   projects permitted to declare dependency management

use pom_pedant_core::{
    Artifact, ConfigError, ErrorReport, ManagementSection, PolicyBreach, ProjectModel, Rule,
    RuleConfig, RuleId,
};
use std::collections::HashSet;

/// Restricts dependency management declarations to an allow-set of projects.
#[derive(Debug, Clone, Default)]
pub struct DependencyManagementLocation {
    allowed_projects: HashSet<Artifact>,
}

impl DependencyManagementLocation {
    /// Creates a rule permitting exactly the given projects.
    ///
    /// Versions are stripped from the entries: membership is decided on
    /// `groupId:artifactId` alone.
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

impl Rule for DependencyManagementLocation {
    fn id(&self) -> RuleId {
        RuleId::DependencyManagementLocation
    }

    fn enforce(
        &self,
        project: &ProjectModel,
        _report: &mut ErrorReport,
    ) -> Result<(), PolicyBreach> {
        if !project.managed_dependencies.is_empty()
            && !self.is_management_allowed(&project.coordinate)
        {
            return Err(PolicyBreach::unauthorized(
                ManagementSection::Dependencies,
                project.coordinate.clone(),
                &self.allowed_projects,
            ));
        }
        Ok(())
    }
}
