//! Error types for the conform library.
//!
//! Conform mismatches are not errors: they come back as data in a
//! [`ConformResult`](crate::ConformResult). `SpecError` covers everything
//! that stops a spec from being built, loaded or sampled.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conform operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A spec was constructed with invalid arguments.
    #[error("Invalid spec: {0}")]
    InvalidSpec(String),

    /// A definition referenced a predicate name that is not registered.
    #[error("Unknown predicate '{0}'")]
    UnknownPredicate(String),

    /// A named generator strategy does not exist.
    #[error("Unknown generator strategy '{0}'")]
    UnknownStrategy(String),

    /// No generator can be derived for a spec node.
    #[error("No generator available for {spec}: {reason}")]
    GeneratorUnavailable { spec: String, reason: String },

    /// A filtered generator could not find a conforming value.
    #[error("Generator for {spec} gave up after {attempts} attempts")]
    GenerationExhausted { spec: String, attempts: usize },

    /// Error reading a definition file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl SpecError {
    pub(crate) fn unavailable(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        SpecError::GeneratorUnavailable {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for conform operations.
pub type Result<T> = std::result::Result<T, SpecError>;
