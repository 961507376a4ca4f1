//! Generate command - print values sampled from a spec as NDJSON.

use std::io::Write;
use std::path::PathBuf;

use conform::{AltSelection, Engine, EngineConfig, GeneratorConfig, OptionalKeys};

pub fn run(
    spec_path: PathBuf,
    count: usize,
    seed: Option<u64>,
    optional_keys: OptionalKeys,
    alt_selection: AltSelection,
    max_filter_attempts: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut generator_config = GeneratorConfig::default()
        .with_optional_keys(optional_keys)
        .with_alt_selection(alt_selection)
        .with_max_filter_attempts(max_filter_attempts);
    if let Some(seed) = seed {
        generator_config = generator_config.with_seed(seed);
    }

    let engine = Engine::with_config(EngineConfig {
        generator: generator_config,
    });
    let spec = engine.load_spec(&spec_path)?;
    let mut generator = engine.generate(&spec)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        let value = generator.next_value()?;
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
    }

    Ok(())
}
