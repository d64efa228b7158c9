//! List rules command implementation.

use pom_pedant_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<8} {:<32} {:<10} Description",
        "Code", "Name", "Severity"
    );
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        let severity = if rule.is_fatal() { "fatal" } else { "advisory" };
        println!(
            "{:<8} {:<32} {:<10} {}",
            rule.id().code(),
            rule.id().name(),
            severity,
            rule.description()
        );
    }

    println!("\nAdvisory rules accumulate violation reports; fatal rules abort the check.");
    println!("Location rules only activate when their allowed_projects option is configured.");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  pom-pedant check --rules dependency-configuration,plugin-configuration");
    println!("  pom-pedant check --rules PP001,PP003");
}
