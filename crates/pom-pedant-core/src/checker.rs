//! Checker orchestrating rule evaluation over project model documents.

use crate::config::Config;
use crate::model::ProjectModel;
use crate::report::{CheckResult, ErrorReport};
use crate::rule::{PolicyBreach, Rule, RuleBox};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a check run.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// IO error reading model documents.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a project model document.
    #[error("Malformed project model {path}: {message}")]
    Parse {
        /// Path to the document that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A fatal policy breach aborted the check.
    #[error(transparent)]
    Breach(#[from] PolicyBreach),
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to check.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the checker.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the checker.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds an include glob pattern for model documents.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Checker, CheckerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.checker.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        let mut include_patterns = self.include_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.checker.exclude.clone());
            include_patterns.extend(config.checker.include.clone());
        }

        if include_patterns.is_empty() {
            include_patterns.push("**/*.pom.json".to_string());
        }
        if exclude_patterns.is_empty() {
            exclude_patterns.push("**/target/**".to_string());
        }

        Ok(Checker {
            root,
            rules: self.rules,
            exclude_patterns,
            include_patterns,
            config: self.config.unwrap_or_default(),
        })
    }
}

/// Evaluates a set of rules against every project model under a root.
///
/// Use [`Checker::builder()`] to construct an instance. Evaluation is
/// single-threaded and synchronous: each model is checked by each enabled
/// rule in registration order, with a fresh [`ErrorReport`] per rule. A
/// [`PolicyBreach`] aborts the whole run.
pub struct Checker {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Config,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the root directory being checked.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks every project model document under the root.
    ///
    /// # Errors
    ///
    /// Returns an error if document discovery or parsing fails, or if a
    /// rule reports a fatal policy breach.
    pub fn check(&self) -> Result<CheckResult, CheckerError> {
        info!("Starting check at {:?}", self.root);

        let documents = self.discover_documents()?;
        info!("Found {} project model document(s)", documents.len());

        let mut result = CheckResult::new();
        for path in &documents {
            debug!("Checking: {}", path.display());
            let model = Self::load_document(path)?;
            let reports = self.check_model(&model)?;
            result.reports.extend(reports);
            result.projects_checked += 1;
        }

        info!(
            "Check complete: {} violation group(s) in {} project(s)",
            result.group_count(),
            result.projects_checked
        );

        Ok(result)
    }

    /// Evaluates every enabled rule against one in-memory model.
    ///
    /// This is the pure entry point: no I/O, no shared mutable state. Only
    /// reports that recorded at least one violation are returned.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`PolicyBreach`] a rule signals.
    pub fn check_model(&self, model: &ProjectModel) -> Result<Vec<ErrorReport>, PolicyBreach> {
        let mut reports = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.id().name()) {
                debug!("Skipping disabled rule: {}", rule.id().name());
                continue;
            }

            let mut report = ErrorReport::new(rule.id());
            rule.enforce(model, &mut report)?;
            if report.has_errors() {
                reports.push(report);
            }
        }

        Ok(reports)
    }

    /// Loads one project model document.
    fn load_document(path: &Path) -> Result<ProjectModel, CheckerError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| CheckerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Discovers all project model documents under the root.
    fn discover_documents(&self) -> Result<Vec<PathBuf>, CheckerError> {
        let mut documents = Vec::new();

        for pattern in &self.include_patterns {
            let full_pattern = format!("{}/{pattern}", self.root.display());
            for entry in glob::glob(&full_pattern)? {
                let path = entry.map_err(|e| CheckerError::Io(e.into_error()))?;

                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }

                documents.push(path);
            }
        }

        documents.sort();
        documents.dedup();
        Ok(documents)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artifact, Dependency};
    use crate::rule::{ManagementSection, RuleId};
    use std::collections::HashSet;
    use std::fs;

    struct FlagVersionedDependencies;

    impl Rule for FlagVersionedDependencies {
        fn id(&self) -> RuleId {
            RuleId::DependencyConfiguration
        }

        fn enforce(
            &self,
            project: &ProjectModel,
            report: &mut ErrorReport,
        ) -> Result<(), PolicyBreach> {
            let versioned: Vec<String> = project
                .dependencies
                .iter()
                .filter(|d| d.version.is_some())
                .map(ToString::to_string)
                .collect();
            if !versioned.is_empty() {
                report.add_group("versions found", versioned);
            }
            Ok(())
        }
    }

    struct AlwaysBreaching;

    impl Rule for AlwaysBreaching {
        fn id(&self) -> RuleId {
            RuleId::DependencyManagementLocation
        }

        fn enforce(
            &self,
            project: &ProjectModel,
            _report: &mut ErrorReport,
        ) -> Result<(), PolicyBreach> {
            Err(PolicyBreach::unauthorized(
                ManagementSection::Dependencies,
                project.coordinate.clone(),
                &HashSet::new(),
            ))
        }
    }

    fn sample_model() -> ProjectModel {
        let mut model = ProjectModel::new(Artifact::with_version("com.example", "app", "1.0"));
        model.dependencies.push(Dependency::new("g", "a", Some("1.0")));
        model
    }

    fn write_model(dir: &Path, name: &str, model: &ProjectModel) {
        let json = serde_json::to_string(model).unwrap();
        fs::write(dir.join(name), json).unwrap();
    }

    #[test]
    fn test_builder() {
        let checker = Checker::builder()
            .root(".")
            .exclude("**/target/**")
            .build()
            .expect("Failed to build checker");

        assert!(checker.root().exists());
        assert_eq!(checker.rule_count(), 0);
    }

    #[test]
    fn test_exclude_patterns() {
        let checker = Checker::builder()
            .root(".")
            .exclude("**/target/**")
            .build()
            .expect("Failed to build checker");

        assert!(checker.should_exclude(Path::new("/foo/target/classes/x.pom.json")));
        assert!(!checker.should_exclude(Path::new("/foo/module/module.pom.json")));
    }

    #[test]
    fn check_discovers_and_evaluates_documents() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_model(tmp.path(), "app.pom.json", &sample_model());
        write_model(
            tmp.path(),
            "lib.pom.json",
            &ProjectModel::new(Artifact::new("com.example", "lib")),
        );

        let checker = Checker::builder()
            .root(tmp.path())
            .rule(FlagVersionedDependencies)
            .build()
            .unwrap();

        let result = checker.check().unwrap();
        assert_eq!(result.projects_checked, 2);
        // Only the violating project contributes a report.
        assert_eq!(result.reports.len(), 1);
        assert!(result.has_errors());
    }

    #[test]
    fn disabled_rules_are_skipped() {
        let config = Config::parse("[rules.dependency-configuration]\nenabled = false\n").unwrap();
        let checker = Checker::builder()
            .root(".")
            .rule(FlagVersionedDependencies)
            .config(config)
            .build()
            .unwrap();

        let reports = checker.check_model(&sample_model()).unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn breach_aborts_the_run() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_model(tmp.path(), "app.pom.json", &sample_model());

        let checker = Checker::builder()
            .root(tmp.path())
            .rule(AlwaysBreaching)
            .build()
            .unwrap();

        let error = checker.check().unwrap_err();
        assert!(matches!(error, CheckerError::Breach(_)));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.pom.json"), "{ not json").unwrap();

        let checker = Checker::builder().root(tmp.path()).build().unwrap();
        let error = checker.check().unwrap_err();
        assert!(matches!(error, CheckerError::Parse { .. }));
    }
}
