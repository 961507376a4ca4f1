//! Conformed output values.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::violation::Violation;

/// Outcome of conforming one input: the conformed value, or every violation found.
pub type ConformResult = std::result::Result<Conformed, Vec<Violation>>;

/// A successfully conformed value.
///
/// Cat and alt specs shape their output with tags; everything else passes the
/// input value through (keys specs after filtering to recognised keys).
#[derive(Debug, Clone, PartialEq)]
pub enum Conformed {
    /// A plain value.
    Value(Value),
    /// Positional output of a cat spec, in declaration order.
    Tagged(Vec<(String, Conformed)>),
    /// The winning branch of an alt spec.
    Branch { tag: String, value: Box<Conformed> },
}

impl Conformed {
    /// Lower to JSON.
    ///
    /// `Tagged` becomes an object in declaration order; `Branch` becomes a
    /// single-entry object `{tag: value}`.
    pub fn into_value(self) -> Value {
        match self {
            Conformed::Value(value) => value,
            Conformed::Tagged(pairs) => {
                let mut map = Map::with_capacity(pairs.len());
                for (tag, conformed) in pairs {
                    map.insert(tag, conformed.into_value());
                }
                Value::Object(map)
            }
            Conformed::Branch { tag, value } => {
                let mut map = Map::with_capacity(1);
                map.insert(tag, value.into_value());
                Value::Object(map)
            }
        }
    }

    /// The plain value, if this is not a tagged structure.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Conformed::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Look up a cat position by tag.
    pub fn get(&self, tag: &str) -> Option<&Conformed> {
        match self {
            Conformed::Tagged(pairs) => pairs.iter().find(|(t, _)| t == tag).map(|(_, c)| c),
            Conformed::Branch { tag: t, value } if t == tag => Some(value),
            _ => None,
        }
    }

    /// The tags of a cat output, or the winning tag of an alt.
    pub fn tags(&self) -> Vec<&str> {
        match self {
            Conformed::Tagged(pairs) => pairs.iter().map(|(t, _)| t.as_str()).collect(),
            Conformed::Branch { tag, .. } => vec![tag.as_str()],
            Conformed::Value(_) => Vec::new(),
        }
    }
}

impl From<Value> for Conformed {
    fn from(value: Value) -> Self {
        Conformed::Value(value)
    }
}

impl Serialize for Conformed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.clone().into_value().serialize(serializer)
    }
}
