//! Entity and project model types.
//!
//! One [`ProjectModel`] aggregates everything a single descriptor file
//! declares: dependencies, managed dependencies, plugins, managed plugins,
//! and the project's own coordinate. The model is produced by an external
//! descriptor parser and is read-only from every rule's perspective.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors from parsing artifact coordinates.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArtifactError {
    /// Coordinate did not have the form `groupId:artifactId[:version]`.
    #[error("invalid artifact coordinate '{input}': expected groupId:artifactId[:version]")]
    Malformed {
        /// The offending input string.
        input: String,
    },
}

/// A `(groupId, artifactId[, version])` coordinate identifying a published unit.
///
/// Equality and hashing are structural over all three fields. Where a
/// membership test must ignore the version (allow-sets of managing
/// projects), normalize with [`Artifact::without_version`] first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Group identifier, e.g. `com.example`.
    pub group_id: String,
    /// Artifact identifier within the group.
    pub artifact_id: String,
    /// Declared version, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Artifact {
    /// Creates a coordinate without a version.
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
        }
    }

    /// Creates a fully versioned coordinate.
    #[must_use]
    pub fn with_version(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: Some(version.into()),
        }
    }

    /// Returns the same coordinate with the version stripped.
    #[must_use]
    pub fn without_version(&self) -> Self {
        Self {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: None,
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

impl FromStr for Artifact {
    type Err = ArtifactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ArtifactError::Malformed {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s.split(':').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(malformed());
        }

        match parts.as_slice() {
            [group_id, artifact_id] => Ok(Self::new(group_id.trim(), artifact_id.trim())),
            [group_id, artifact_id, version] => Ok(Self::with_version(
                group_id.trim(),
                artifact_id.trim(),
                version.trim(),
            )),
            _ => Err(malformed()),
        }
    }
}

/// A `(groupId, artifactId)` pair excluded from a dependency's transitive graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    /// Group identifier of the excluded artifact.
    pub group_id: String,
    /// Artifact identifier of the excluded artifact.
    pub artifact_id: String,
}

impl Exclusion {
    /// Creates a new exclusion pair.
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Resolution scope of a dependency declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    /// Default scope, on all classpaths.
    Compile,
    /// Provided by the runtime container.
    Provided,
    /// Needed at runtime only.
    Runtime,
    /// Test compilation and execution only.
    Test,
    /// Resolved from the local system.
    System,
    /// Imports a managed dependency set.
    Import,
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Compile => "compile",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
            Self::Test => "test",
            Self::System => "system",
            Self::Import => "import",
        };
        write!(f, "{name}")
    }
}

/// One dependency declaration from a descriptor file.
///
/// A managed dependency has the same shape; it only lives in the
/// management sequence of the [`ProjectModel`]. A missing `version` means
/// "inherited from elsewhere" and is deliberately distinct from an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Group identifier.
    pub group_id: String,
    /// Artifact identifier.
    pub artifact_id: String,
    /// Explicitly declared version, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Resolution scope, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<DependencyScope>,
    /// Classifier, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Packaging type (the descriptor's `type` element), if declared.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Transitive exclusions declared on this dependency.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<Exclusion>,
}

impl Dependency {
    /// Creates a dependency with only its coordinate filled in.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<&str>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.map(str::to_string),
            scope: None,
            classifier: None,
            kind: None,
            exclusions: Vec::new(),
        }
    }

    /// Sets the resolution scope.
    #[must_use]
    pub fn scope(mut self, scope: DependencyScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Adds a transitive exclusion.
    #[must_use]
    pub fn exclude(mut self, exclusion: Exclusion) -> Self {
        self.exclusions.push(exclusion);
        self
    }

    /// Returns this declaration's coordinate.
    #[must_use]
    pub fn coordinate(&self) -> Artifact {
        Artifact {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

/// One build plugin declaration from a descriptor file.
///
/// A managed plugin has the same shape and lives in the plugin management
/// sequence of the [`ProjectModel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Group identifier.
    pub group_id: String,
    /// Artifact identifier.
    pub artifact_id: String,
    /// Explicitly declared version, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Plugin {
    /// Creates a plugin declaration.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<&str>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.map(str::to_string),
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

/// The full declared picture of one descriptor file.
///
/// Sequences reflect declaration order. Rules query the model through
/// shared references and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModel {
    /// The project's own coordinate.
    pub coordinate: Artifact,
    /// Dependency declarations, in declaration order.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    /// Dependency management declarations, in declaration order.
    #[serde(default)]
    pub managed_dependencies: Vec<Dependency>,
    /// Plugin declarations, in declaration order.
    #[serde(default)]
    pub plugins: Vec<Plugin>,
    /// Plugin management declarations, in declaration order.
    #[serde(default)]
    pub managed_plugins: Vec<Plugin>,
}

impl ProjectModel {
    /// Creates an empty model for the given project coordinate.
    #[must_use]
    pub fn new(coordinate: Artifact) -> Self {
        Self {
            coordinate,
            dependencies: Vec::new(),
            managed_dependencies: Vec::new(),
            plugins: Vec::new(),
            managed_plugins: Vec::new(),
        }
    }
}
