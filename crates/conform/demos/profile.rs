//! Example: Conform documents against a spec definition and sample from it.
//!
//! Usage:
//!   cargo run --example profile -- <spec.json> [document.json]
//!
//! Without a document, prints five generated values instead.

use std::env;

use conform::{Engine, EngineConfig, GeneratorConfig};

fn main() -> conform::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <spec.json> [document.json]");
        std::process::exit(1);
    }

    let engine = Engine::with_config(EngineConfig {
        generator: GeneratorConfig::default().with_seed(7),
    });
    let spec = engine.load_spec(&args[1])?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Spec: {}", spec.description());
    println!("{}", separator);
    println!();

    if let Some(doc_path) = args.get(2) {
        let src = std::fs::read_to_string(doc_path).map_err(|source| conform::SpecError::Io {
            path: doc_path.into(),
            source,
        })?;
        let document: serde_json::Value = serde_json::from_str(&src)?;

        match engine.conform(&spec, &document) {
            Ok(conformed) => {
                println!("## Conformed");
                println!("{}", serde_json::to_string_pretty(&conformed.into_value())?);
            }
            Err(violations) => {
                println!("## Violations ({})", violations.len());
                for violation in &violations {
                    println!("  [{}] {}", violation.kind.label(), violation);
                }
            }
        }
        return Ok(());
    }

    println!("## Samples");
    for value in engine.generate(&spec)?.sample(5)? {
        println!("  {}", value);
    }

    Ok(())
}
