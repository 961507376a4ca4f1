//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use conform::{AltSelection, OptionalKeys};
use std::path::PathBuf;

/// Conform: composable data specs for JSON documents
#[derive(Parser)]
#[command(name = "conform")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Conform JSON documents against a spec definition
    Check {
        /// Path to the spec definition (JSON)
        #[arg(short, long, value_name = "SPEC_FILE")]
        spec: PathBuf,

        /// Input files; each holds one JSON document (or NDJSON with --ndjson)
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Treat every non-empty line of each input as a document
        #[arg(long)]
        ndjson: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print values generated from a spec definition as NDJSON
    Generate {
        /// Path to the spec definition (JSON)
        #[arg(short, long, value_name = "SPEC_FILE")]
        spec: PathBuf,

        /// Number of values to generate
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// How optional keys are included
        #[arg(long, default_value = "sometimes")]
        optional_keys: OptionalKeysChoice,

        /// How alt branches are chosen
        #[arg(long, default_value = "random")]
        alt: AltChoice,

        /// Candidates drawn per filtered value before giving up
        #[arg(long, default_value = "100")]
        max_filter_attempts: usize,
    },

    /// Show a spec's description and whether it can generate
    Describe {
        /// Path to the spec definition (JSON)
        #[arg(short, long, value_name = "SPEC_FILE")]
        spec: PathBuf,
    },

    /// List the predicates definitions can reference by name
    Predicates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Optional key policy for generation.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OptionalKeysChoice {
    Never,
    Sometimes,
    Always,
}

impl From<OptionalKeysChoice> for OptionalKeys {
    fn from(choice: OptionalKeysChoice) -> Self {
        match choice {
            OptionalKeysChoice::Never => OptionalKeys::Never,
            OptionalKeysChoice::Sometimes => OptionalKeys::Sometimes,
            OptionalKeysChoice::Always => OptionalKeys::Always,
        }
    }
}

/// Alt branch selection for generation.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AltChoice {
    First,
    Random,
}

impl From<AltChoice> for AltSelection {
    fn from(choice: AltChoice) -> Self {
        match choice {
            AltChoice::First => AltSelection::First,
            AltChoice::Random => AltSelection::Random,
        }
    }
}
