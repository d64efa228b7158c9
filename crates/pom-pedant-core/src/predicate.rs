//! Predicates for selecting violating subsets of a project model.
//!
//! Each predicate is a pure function over one entity. `select` filters an
//! ordered sequence into the subsequence satisfying the predicate,
//! preserving declaration order. Filtering is side-effect free and may be
//! re-run against the same model with identical results, which keeps
//! repeated checks idempotent.

use crate::model::{Dependency, Plugin};

/// Version placeholder referring to the current project's version.
pub const PROJECT_VERSION_TOKEN: &str = "${project.version}";

/// Shorthand version placeholder referring to the inherited version.
pub const INHERITED_VERSION_TOKEN: &str = "${version}";

/// Returns `true` when `version` is one of the recognized placeholder tokens.
///
/// Placeholders are matched by exact string equality; no interpolation is
/// performed.
fn is_placeholder(version: Option<&str>) -> bool {
    matches!(
        version,
        Some(PROJECT_VERSION_TOKEN | INHERITED_VERSION_TOKEN)
    )
}

/// Predicates over dependency declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyPredicate {
    /// The dependency declares an explicit version.
    HasVersion,
    /// The declared version is not a project-version placeholder.
    NonProjectVersion,
    /// The dependency declares at least one exclusion.
    HasExclusions,
}

impl DependencyPredicate {
    /// Evaluates this predicate against one dependency.
    #[must_use]
    pub fn eval(self, dependency: &Dependency) -> bool {
        match self {
            Self::HasVersion => dependency.version.is_some(),
            Self::NonProjectVersion => !is_placeholder(dependency.version.as_deref()),
            Self::HasExclusions => !dependency.exclusions.is_empty(),
        }
    }

    /// Selects the subsequence of `dependencies` satisfying this predicate.
    #[must_use]
    pub fn select<'a>(self, dependencies: &'a [Dependency]) -> Vec<&'a Dependency> {
        dependencies.iter().filter(|d| self.eval(d)).collect()
    }
}

/// Predicates over plugin declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginPredicate {
    /// The plugin declares an explicit version.
    HasVersion,
    /// The declared version is not a project-version placeholder.
    NonProjectVersion,
}

impl PluginPredicate {
    /// Evaluates this predicate against one plugin.
    #[must_use]
    pub fn eval(self, plugin: &Plugin) -> bool {
        match self {
            Self::HasVersion => plugin.version.is_some(),
            Self::NonProjectVersion => !is_placeholder(plugin.version.as_deref()),
        }
    }

    /// Selects the subsequence of `plugins` satisfying this predicate.
    #[must_use]
    pub fn select<'a>(self, plugins: &'a [Plugin]) -> Vec<&'a Plugin> {
        plugins.iter().filter(|p| self.eval(p)).collect()
    }
}
