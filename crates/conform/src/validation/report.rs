//! Batch conform reports.

use indexmap::IndexMap;
use serde::Serialize;

use super::violation::{Violation, ViolationKind};

/// Violations found in one document of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    /// Position of the document in the batch.
    pub index: usize,
    pub violations: Vec<Violation>,
}

/// Summary of conforming many documents against one spec.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConformReport {
    /// Description of the spec that was checked.
    pub spec: String,
    /// Total number of documents checked.
    pub documents: usize,
    /// Documents that conformed.
    pub passed: usize,
    /// Documents with at least one violation.
    pub failed: usize,
    /// Total number of violations.
    pub total_violations: usize,
    /// Violations by kind.
    pub violations_by_kind: IndexMap<ViolationKind, usize>,
    /// Per-document violations, in batch order.
    pub failures: Vec<DocumentFailure>,
}

impl ConformReport {
    pub fn new(spec: impl Into<String>) -> Self {
        Self {
            spec: spec.into(),
            ..Self::default()
        }
    }

    /// Record the outcome of one document.
    pub fn record(&mut self, violations: Option<Vec<Violation>>) {
        let index = self.documents;
        self.documents += 1;

        let Some(violations) = violations else {
            self.passed += 1;
            return;
        };

        self.failed += 1;
        self.total_violations += violations.len();
        for v in &violations {
            *self.violations_by_kind.entry(v.kind).or_insert(0) += 1;
        }
        self.failures.push(DocumentFailure { index, violations });
    }

    /// True when every document conformed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Fraction of documents that conformed (1.0 for an empty batch).
    pub fn pass_rate(&self) -> f64 {
        if self.documents == 0 {
            return 1.0;
        }
        self.passed as f64 / self.documents as f64
    }
}
