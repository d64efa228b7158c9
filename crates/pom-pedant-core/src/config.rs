//! Configuration types for pom-pedant.

use crate::model::{Artifact, ArtifactError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::str::FromStr;

/// Top-level configuration for pom-pedant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Checker configuration.
    #[serde(default)]
    pub checker: CheckerConfig,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Checker-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Root directory to check (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns selecting project model documents.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Glob patterns to exclude from checking.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            include: default_include(),
            exclude: default_exclude(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_include() -> Vec<String> {
    vec!["**/*.pom.json".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["**/target/**".to_string()]
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }

    /// Gets a coordinate-set option.
    ///
    /// The option may be a comma-separated string of
    /// `groupId:artifactId` entries or a TOML array of such strings.
    /// Entries are parsed eagerly so a malformed coordinate fails at
    /// startup, before any project model is evaluated.
    ///
    /// # Errors
    ///
    /// Returns an error when any entry is not a valid coordinate.
    pub fn get_artifact_set(&self, key: &str) -> Result<Option<HashSet<Artifact>>, ConfigError> {
        let Some(value) = self.options.get(key) else {
            return Ok(None);
        };

        let entries: Vec<String> = match value {
            toml::Value::String(s) => s.split(',').map(str::to_string).collect(),
            toml::Value::Array(items) => items
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect(),
            _ => Vec::new(),
        };

        let mut artifacts = HashSet::new();
        for entry in entries {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            let artifact =
                Artifact::from_str(trimmed).map_err(|source| ConfigError::Coordinate {
                    key: key.to_string(),
                    source,
                })?;
            artifacts.insert(artifact);
        }

        Ok(Some(artifacts))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Malformed coordinate in a coordinate-list option.
    #[error("Invalid coordinate list in option '{key}': {source}")]
    Coordinate {
        /// The offending option key.
        key: String,
        /// Underlying coordinate parse error.
        source: ArtifactError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert_eq!(config.checker.include, ["**/*.pom.json"]);
        assert_eq!(config.checker.exclude, ["**/target/**"]);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[checker]
root = "./modules"
exclude = ["**/generated/**"]

[rules.dependency-configuration]
enabled = true
manage_versions = true
manage_exclusions = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.checker.root, PathBuf::from("./modules"));
        assert!(config.is_rule_enabled("dependency-configuration"));

        let rule_config = config.rules.get("dependency-configuration").unwrap();
        assert!(rule_config.get_bool("manage_versions", false));
        assert!(!rule_config.get_bool("manage_exclusions", true));
    }

    #[test]
    fn disabled_rule_is_reported_disabled() {
        let config = Config::parse("[rules.plugin-configuration]\nenabled = false\n").unwrap();
        assert!(!config.is_rule_enabled("plugin-configuration"));
        // Unknown rules default to enabled.
        assert!(config.is_rule_enabled("dependency-configuration"));
    }

    #[test]
    fn artifact_set_accepts_comma_separated_string() {
        let config = Config::parse(
            "[rules.dependency-management-location]\nallowed_projects = \"com.example:parent, com.example:build\"\n",
        )
        .unwrap();
        let rule_config = config.rules.get("dependency-management-location").unwrap();

        let set = rule_config
            .get_artifact_set("allowed_projects")
            .unwrap()
            .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Artifact::new("com.example", "parent")));
    }

    #[test]
    fn artifact_set_accepts_toml_array() {
        let config = Config::parse(
            "[rules.plugin-management-location]\nallowed_projects = [\"com.example:parent\"]\n",
        )
        .unwrap();
        let rule_config = config.rules.get("plugin-management-location").unwrap();

        let set = rule_config
            .get_artifact_set("allowed_projects")
            .unwrap()
            .unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn malformed_coordinate_fails_at_parse_time() {
        let config = Config::parse(
            "[rules.dependency-management-location]\nallowed_projects = \"not-a-coordinate\"\n",
        )
        .unwrap();
        let rule_config = config.rules.get("dependency-management-location").unwrap();

        let error = rule_config.get_artifact_set("allowed_projects").unwrap_err();
        assert!(matches!(error, ConfigError::Coordinate { .. }));
    }

    #[test]
    fn missing_artifact_set_option_is_none() {
        let rule_config = RuleConfig::default();
        assert!(rule_config.get_artifact_set("allowed_projects").unwrap().is_none());
    }
}
