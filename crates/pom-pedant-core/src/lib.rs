//! # pom-pedant-core
//!
//! Core framework for enforcing conventions in build-project descriptor
//! files (POM-like manifests).
//!
//! This crate provides the foundational types for building descriptor
//! convention checkers. It includes:
//!
//! - [`ProjectModel`] and its entity types, the read-only picture of one
//!   descriptor file as supplied by an external parser
//! - [`DependencyPredicate`]/[`PluginPredicate`] for selecting violating
//!   subsets of a model
//! - [`Rule`] trait for policy rules, with [`ErrorReport`] for advisory
//!   violations and [`PolicyBreach`] for fatal ones
//! - [`Checker`] for orchestrating rule evaluation over a tree of project
//!   model documents
//!
//! ## Example
//!
//! ```ignore
//! use pom_pedant_core::Checker;
//!
//! let checker = Checker::builder()
//!     .root("./modules")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = checker.check()?;
//! println!("{}", result.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod model;
mod predicate;
mod report;
mod rule;

pub use checker::{Checker, CheckerBuilder, CheckerError};
pub use config::{CheckerConfig, Config, ConfigError, RuleConfig};
pub use model::{
    Artifact, ArtifactError, Dependency, DependencyScope, Exclusion, Plugin, ProjectModel,
};
pub use predicate::{
    DependencyPredicate, PluginPredicate, INHERITED_VERSION_TOKEN, PROJECT_VERSION_TOKEN,
};
pub use report::{to_lines, CheckResult, ErrorReport, ViolationGroup};
pub use rule::{ManagementSection, PolicyBreach, Rule, RuleBox, RuleId};
