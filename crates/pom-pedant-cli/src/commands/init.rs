//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# pom-pedant configuration

[checker]
# Root directory to check (default: current directory)
# root = "."

# Glob patterns selecting project model documents
include = ["**/*.pom.json"]

# Glob patterns to exclude from checking
exclude = ["**/target/**"]

# Rule configurations
# Each rule can be enabled/disabled and configured per option

[rules.dependency-configuration]
enabled = true
manage_versions = true
allow_unmanaged_project_versions = true
manage_exclusions = true

[rules.plugin-configuration]
enabled = true
manage_versions = true

# Location rules activate once an allow-set is configured.
# Entries use the groupId:artifactId format.
#
# [rules.dependency-management-location]
# allowed_projects = "com.example:parent"
#
# [rules.plugin-management-location]
# allowed_projects = "com.example:parent"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("pom-pedant.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created pom-pedant.toml");
    println!("\nNext steps:");
    println!("  1. Edit pom-pedant.toml to configure rules");
    println!("  2. Run: pom-pedant check");

    Ok(())
}
