//! Conform CLI - check JSON documents against specs and sample generators.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check {
            spec,
            inputs,
            ndjson,
            json,
        } => commands::check::run(spec, inputs, ndjson, json, cli.verbose),

        Commands::Generate {
            spec,
            count,
            seed,
            optional_keys,
            alt,
            max_filter_attempts,
        } => commands::generate::run(
            spec,
            count,
            seed,
            optional_keys.into(),
            alt.into(),
            max_filter_attempts,
        ),

        Commands::Describe { spec } => commands::describe::run(spec),

        Commands::Predicates { json } => commands::predicates::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
