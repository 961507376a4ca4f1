//! Conform results: violations, paths, conformed values and batch reports.

mod conformed;
mod report;
mod violation;

pub use conformed::{ConformResult, Conformed};
pub use report::{ConformReport, DocumentFailure};
pub use violation::{Path, PathSegment, Violation, ViolationKind};
