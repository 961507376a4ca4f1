//! Conform: composable data specs for runtime values.
//!
//! A [`Spec`] is built from predicates, literals and combinators. Conforming a
//! value against it yields either the conformed value or every violation found,
//! each annotated with the path where it occurred. The same spec can derive a
//! [`Generator`] of values it accepts, for property-based testing.
//!
//! # Core Principles
//!
//! - **Specs are data**: immutable, `Send + Sync`, safe to share across threads
//! - **Batch reporting**: independent violations are all collected, not fail-fast
//! - **One spec, two uses**: the tree that validates also generates
//!
//! # Example
//!
//! ```
//! use conform::predicates::{integer, string};
//! use conform::{cat, keys};
//! use serde_json::json;
//!
//! let person = keys()
//!     .req("name", string())
//!     .opt("age", integer())
//!     .build()
//!     .unwrap();
//!
//! let conformed = person.conform(&json!({"name": "Chris", "extra": 1})).unwrap();
//! assert_eq!(conformed.into_value(), json!({"name": "Chris"}));
//!
//! let row = cat([("age", integer()), ("name", string())]).unwrap();
//! let errors = row.conform(&json!([31])).unwrap_err();
//! assert_eq!(errors[0].at.as_deref(), Some("name"));
//! ```

pub mod definition;
pub mod error;
pub mod generate;
pub mod predicates;
pub mod spec;
pub mod validation;

mod engine;

pub use crate::engine::{Engine, EngineConfig};
pub use definition::{PredicateRegistry, SpecDef};
pub use error::{Result, SpecError};
pub use generate::{AltSelection, GenStrategy, Generator, GeneratorConfig, OptionalKeys};
pub use spec::{
    Keys, KeysBuilder, Predicate, Spec, alt, build, cat, conform, generate, keys, lit, pred,
    sand, sor,
};
pub use validation::{
    ConformReport, ConformResult, Conformed, DocumentFailure, Path, PathSegment, Violation,
    ViolationKind,
};
