//! # pom-pedant-rules
//!
//! Built-in convention rules for pom-pedant.
//!
//! ## Available Rules
//!
//! | Code | Name | Severity | Description |
//! |------|------|----------|-------------|
//! | PP001 | `dependency-configuration` | advisory | Dependency versions and exclusions have to be declared in dependency management |
//! | PP002 | `dependency-management-location` | fatal | Only authorized projects may declare dependency management |
//! | PP003 | `plugin-configuration` | advisory | Plugin versions have to be declared in plugin management |
//! | PP004 | `plugin-management-location` | fatal | Only authorized projects may declare plugin management |
//!
//! ## Usage
//!
//! ```ignore
//! use pom_pedant_core::Checker;
//! use pom_pedant_rules::{DependencyConfiguration, DependencyManagementLocation};
//!
//! let checker = Checker::builder()
//!     .root("./modules")
//!     .rule(DependencyConfiguration::new())
//!     .rule(DependencyManagementLocation::new([allowed]))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dependency_configuration;
mod dependency_management_location;
mod dispatch;
mod plugin_configuration;
mod plugin_management_location;
mod presets;

pub use dependency_configuration::DependencyConfiguration;
pub use dependency_management_location::DependencyManagementLocation;
pub use dispatch::PolicyRule;
pub use plugin_configuration::PluginConfiguration;
pub use plugin_management_location::PluginManagementLocation;
pub use presets::{all_rules, configured_rules, default_rules};

/// Re-export core types for convenience.
pub use pom_pedant_core::{ErrorReport, PolicyBreach, Rule, RuleId};
