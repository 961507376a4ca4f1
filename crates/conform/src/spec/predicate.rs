//! Leaf specs: predicates and literals.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::generate::GenStrategy;
use crate::validation::{ConformResult, Conformed, Path, Violation};

/// Boolean test over a runtime value.
pub type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// A single-argument boolean function plus the description reported when it fails.
///
/// The function is shared behind an `Arc`, so cloning a predicate (and any spec
/// containing it) is cheap and the clone compares equal to the original.
#[derive(Clone)]
pub struct Predicate {
    description: String,
    test: Arc<PredicateFn>,
    strategy: Option<GenStrategy>,
}

impl Predicate {
    /// Create a predicate from a description and a test function.
    pub fn new(
        description: impl Into<String>,
        test: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            test: Arc::new(test),
            strategy: None,
        }
    }

    /// Attach a sampling strategy so the predicate can generate values.
    pub fn with_generator(mut self, strategy: GenStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn strategy(&self) -> Option<&GenStrategy> {
        self.strategy.as_ref()
    }

    /// Run the test function.
    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }

    pub(crate) fn conform_at(&self, path: &Path, input: &Value) -> ConformResult {
        if self.test(input) {
            Ok(Conformed::Value(input.clone()))
        } else {
            Err(vec![Violation::mismatch(path.clone(), input, &self.description)])
        }
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && Arc::ptr_eq(&self.test, &other.test)
            && self.strategy == other.strategy
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

/// Printable form of a literal, used as its failure description.
pub(crate) fn literal_description(value: &Value) -> String {
    value.to_string()
}

pub(crate) fn conform_literal(literal: &Value, path: &Path, input: &Value) -> ConformResult {
    if input == literal {
        Ok(Conformed::Value(input.clone()))
    } else {
        Err(vec![Violation::mismatch(
            path.clone(),
            input,
            literal_description(literal),
        )])
    }
}
