//! Describe command - show a spec and its generator availability.

use std::path::PathBuf;

use colored::Colorize;
use conform::Engine;

pub fn run(spec_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let spec = engine.load_spec(&spec_path)?;

    println!("{} {}", "Kind:".cyan().bold(), spec.kind());
    println!("{} {}", "Spec:".cyan().bold(), spec.description());

    match spec.generate() {
        Ok(_) => println!("{} {}", "Generator:".cyan().bold(), "available".green()),
        Err(e) => println!("{} {}", "Generator:".cyan().bold(), e.to_string().yellow()),
    }

    Ok(())
}
