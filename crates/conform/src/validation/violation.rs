//! Violation records and the path protocol.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of mismatch detected while conforming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A predicate or literal rejected the value.
    Mismatch,
    /// A required key of a keys spec was absent.
    RequiredKeyMissing,
    /// A cat position had no corresponding input element.
    InsufficientInput,
    /// A keys spec received something other than an object.
    NotAMap,
    /// A cat spec received something other than an array.
    NotASequence,
}

impl ViolationKind {
    /// Get a human-readable label for the violation kind.
    pub fn label(&self) -> &'static str {
        match self {
            ViolationKind::Mismatch => "Mismatch",
            ViolationKind::RequiredKeyMissing => "Required Key Missing",
            ViolationKind::InsufficientInput => "Insufficient Input",
            ViolationKind::NotAMap => "Not A Map",
            ViolationKind::NotASequence => "Not A Sequence",
        }
    }
}

/// One step into a nested input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PathSegment {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
    /// Alternative tag.
    Tag(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{key}"),
            PathSegment::Index(i) => write!(f, "{i}"),
            PathSegment::Tag(tag) => write!(f, ":{tag}"),
        }
    }
}

/// Location of a check within the input.
///
/// Paths are never mutated in place: [`Path::child`] returns a new path, so a
/// single spec can be conformed from many threads without sharing a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// The empty (root) path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A new path with `segment` appended.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Self(segments)
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    pub fn tag(&self, tag: impl Into<String>) -> Self {
        self.child(PathSegment::Tag(tag.into()))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// A single mismatch between a spec and an input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Kind of mismatch.
    pub kind: ViolationKind,
    /// Where in the input the check happened.
    pub path: Path,
    /// The offending value (`null` when the value was absent).
    pub input: Value,
    /// Description of the spec that failed.
    pub description: String,
    /// Tag of the cat position or alt branch that owns this violation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub at: Option<String>,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        kind: ViolationKind,
        path: Path,
        input: Value,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path,
            input,
            description: description.into(),
            at: None,
        }
    }

    /// A predicate or literal mismatch.
    pub fn mismatch(path: Path, input: &Value, description: impl Into<String>) -> Self {
        Self::new(ViolationKind::Mismatch, path, input.clone(), description)
    }

    /// Set the owning tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.at = Some(tag.into());
        self
    }

    /// Claim the violation for an enclosing cat position or alt branch.
    ///
    /// Replaces any tag set further down; nested alt tags stay in the path.
    pub(crate) fn retag(&mut self, tag: &str) {
        self.at = Some(tag.to_string());
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_root() {
            write!(f, "in: {} ", self.path)?;
        }
        write!(f, "val: {} fails: {}", self.input, self.description)?;
        if let Some(tag) = &self.at {
            write!(f, " at: :{tag}")?;
        }
        Ok(())
    }
}
