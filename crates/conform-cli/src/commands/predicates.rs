//! Predicates command - list the predicates definitions can reference.

use colored::Colorize;
use conform::PredicateRegistry;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = PredicateRegistry::builtin();

    if json_output {
        let listing: Vec<_> = registry
            .iter()
            .map(|(name, predicate)| {
                serde_json::json!({
                    "name": name,
                    "description": predicate.description(),
                    "generator": predicate.strategy().map(|s| s.name()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "Registered predicates".cyan().bold());
    println!();
    for (name, predicate) in registry.iter() {
        let generator = match predicate.strategy() {
            Some(strategy) => strategy.name().green(),
            None => "none".dimmed(),
        };
        println!(
            "  {:<14} {:<16} generator: {}",
            name.white().bold(),
            predicate.description(),
            generator
        );
    }

    Ok(())
}
