//! Dispatch over the closed set of policy rules.
//!
//! [`PolicyRule`] wraps every concrete rule in one tagged union so that
//! consumers holding a heterogeneous collection can apply variant-specific
//! logic (ordering rule families, selecting by identity, separating fatal
//! from advisory rules) through exhaustive matching instead of runtime
//! type inspection.

use crate::{
    DependencyConfiguration, DependencyManagementLocation, PluginConfiguration,
    PluginManagementLocation,
};
use pom_pedant_core::{Rule, RuleBox, RuleId};

/// One concrete policy rule, tagged by variant.
#[derive(Debug, Clone)]
pub enum PolicyRule {
    /// Dependency versions/exclusions belong in management.
    DependencyConfiguration(DependencyConfiguration),
    /// Dependency management confined to authorized projects.
    DependencyManagementLocation(DependencyManagementLocation),
    /// Plugin versions belong in management.
    PluginConfiguration(PluginConfiguration),
    /// Plugin management confined to authorized projects.
    PluginManagementLocation(PluginManagementLocation),
}

impl PolicyRule {
    /// Returns the identity of the wrapped rule.
    #[must_use]
    pub fn id(&self) -> RuleId {
        self.as_rule().id()
    }

    /// Returns a brief description of the wrapped rule.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.as_rule().description()
    }

    /// Returns `true` when a violation of this rule aborts the check.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::DependencyManagementLocation(_) | Self::PluginManagementLocation(_) => true,
            Self::DependencyConfiguration(_) | Self::PluginConfiguration(_) => false,
        }
    }

    /// Evaluation precedence: fatal location rules run before advisory
    /// configuration rules so a structural breach surfaces first.
    #[must_use]
    pub fn precedence(&self) -> u8 {
        u8::from(!self.is_fatal())
    }

    /// Borrows the wrapped rule as a trait object.
    #[must_use]
    pub fn as_rule(&self) -> &dyn Rule {
        match self {
            Self::DependencyConfiguration(rule) => rule,
            Self::DependencyManagementLocation(rule) => rule,
            Self::PluginConfiguration(rule) => rule,
            Self::PluginManagementLocation(rule) => rule,
        }
    }

    /// Erases the variant into a boxed rule for the checker.
    #[must_use]
    pub fn into_rule_box(self) -> RuleBox {
        match self {
            Self::DependencyConfiguration(rule) => Box::new(rule),
            Self::DependencyManagementLocation(rule) => Box::new(rule),
            Self::PluginConfiguration(rule) => Box::new(rule),
            Self::PluginManagementLocation(rule) => Box::new(rule),
        }
    }
}

impl From<DependencyConfiguration> for PolicyRule {
    fn from(rule: DependencyConfiguration) -> Self {
        Self::DependencyConfiguration(rule)
    }
}

impl From<DependencyManagementLocation> for PolicyRule {
    fn from(rule: DependencyManagementLocation) -> Self {
        Self::DependencyManagementLocation(rule)
    }
}

impl From<PluginConfiguration> for PolicyRule {
    fn from(rule: PluginConfiguration) -> Self {
        Self::PluginConfiguration(rule)
    }
}

impl From<PluginManagementLocation> for PolicyRule {
    fn from(rule: PluginManagementLocation) -> Self {
        Self::PluginManagementLocation(rule)
    }
}
