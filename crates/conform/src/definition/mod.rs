//! Declarative spec definitions.
//!
//! A [`SpecDef`] is the serializable form of a spec tree. Predicates are
//! referenced by name and resolved against a [`PredicateRegistry`] when the
//! definition is built:
//!
//! ```json
//! {"keys": {
//!     "req": {"name": "string?", "age": {"and": ["integer?", {"pred": "pos_integer?"}]}},
//!     "opt": {"tags": {"cat": {"first": "string?", "second": "string?"}}}
//! }}
//! ```

mod registry;

use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SpecError};
use crate::generate::GenStrategy;
use crate::spec::{self, Predicate, Spec};

pub use registry::PredicateRegistry;

/// Serializable spec tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecDef {
    /// Shorthand for a registered predicate.
    Named(String),
    Node(Node),
}

/// A spec node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Registered predicate by name.
    Pred(String),
    /// Literal value.
    Lit(Value),
    /// String matching a regular expression.
    Regex(String),
    And(Vec<SpecDef>),
    Or(Vec<SpecDef>),
    Keys(KeysDef),
    Cat(IndexMap<String, SpecDef>),
    Alt(IndexMap<String, SpecDef>),
}

/// Required and optional key definitions, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeysDef {
    pub req: IndexMap<String, SpecDef>,
    pub opt: IndexMap<String, SpecDef>,
}

impl SpecDef {
    /// Parse a definition from JSON text.
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Load a definition from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let def = Self::from_json(&src)?;
        tracing::debug!(path = %path.display(), "loaded spec definition");
        Ok(def)
    }

    /// Resolve predicate names and build the spec.
    pub fn build(&self, registry: &PredicateRegistry) -> Result<Spec> {
        match self {
            SpecDef::Named(name) => named(registry, name),
            SpecDef::Node(node) => node.build(registry),
        }
    }
}

impl Node {
    fn build(&self, registry: &PredicateRegistry) -> Result<Spec> {
        match self {
            Node::Pred(name) => named(registry, name),
            Node::Lit(value) => Ok(spec::lit(value.clone())),
            Node::Regex(pattern) => regex_predicate(pattern),
            Node::And(children) => spec::sand(build_all(children, registry)?),
            Node::Or(children) => spec::sor(build_all(children, registry)?),
            Node::Keys(keys) => {
                let mut builder = spec::keys();
                for (key, def) in &keys.req {
                    builder = builder.req(key.clone(), def.build(registry)?);
                }
                for (key, def) in &keys.opt {
                    builder = builder.opt(key.clone(), def.build(registry)?);
                }
                builder.build()
            }
            Node::Cat(positions) => spec::cat(build_tagged(positions, registry)?),
            Node::Alt(branches) => spec::alt(build_tagged(branches, registry)?),
        }
    }
}

fn named(registry: &PredicateRegistry, name: &str) -> Result<Spec> {
    registry
        .get(name)
        .cloned()
        .map(Spec::Predicate)
        .ok_or_else(|| SpecError::UnknownPredicate(name.to_string()))
}

fn regex_predicate(pattern: &str) -> Result<Spec> {
    let re = Regex::new(pattern)?;
    let predicate = Predicate::new(format!("matches?(/{pattern}/)"), move |v| {
        v.as_str().is_some_and(|s| re.is_match(s))
    });
    Ok(Spec::Predicate(predicate))
}

fn build_all(defs: &[SpecDef], registry: &PredicateRegistry) -> Result<Vec<Spec>> {
    defs.iter().map(|def| def.build(registry)).collect()
}

fn build_tagged(
    defs: &IndexMap<String, SpecDef>,
    registry: &PredicateRegistry,
) -> Result<Vec<(String, Spec)>> {
    defs.iter()
        .map(|(tag, def)| Ok((tag.clone(), def.build(registry)?)))
        .collect()
}

/// Build a predicate with a named generator strategy, e.g. for registering
/// custom predicates from configuration.
pub fn predicate_with_strategy(
    description: impl Into<String>,
    strategy: &str,
    test: impl Fn(&Value) -> bool + Send + Sync + 'static,
) -> Result<Predicate> {
    Ok(Predicate::new(description, test).with_generator(GenStrategy::from_name(strategy)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ViolationKind;
    use serde_json::json;

    fn build(src: &str) -> Result<Spec> {
        SpecDef::from_json(src)?.build(&PredicateRegistry::builtin())
    }

    #[test]
    fn test_bare_string_names_predicate() {
        let spec = build(r#""integer?""#).unwrap();
        assert_eq!(spec, crate::predicates::integer());
    }

    #[test]
    fn test_keys_definition() {
        let spec = build(
            r#"{"keys": {"req": {"name": "string?"}, "opt": {"age": {"pred": "integer?"}}}}"#,
        )
        .unwrap();

        assert!(spec.is_valid(&json!({"name": "a"})));
        let errors = spec.conform(&json!({"age": 2})).unwrap_err();
        assert_eq!(errors[0].kind, ViolationKind::RequiredKeyMissing);
    }

    #[test]
    fn test_cat_keeps_declaration_order() {
        let spec = build(r#"{"cat": {"zeta": "integer?", "alpha": "string?"}}"#).unwrap();
        let conformed = spec.conform(&json!([1, "a"])).unwrap();
        assert_eq!(conformed.tags(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_alt_and_literals() {
        let spec = build(r#"{"alt": {"none": {"lit": null}, "num": "number?"}}"#).unwrap();
        assert_eq!(spec.conform(&json!(null)).unwrap().tags(), vec!["none"]);
        assert_eq!(spec.conform(&json!(1.5)).unwrap().tags(), vec!["num"]);
    }

    #[test]
    fn test_regex_predicate() {
        let spec = build(r#"{"regex": "^[a-z]+$"}"#).unwrap();
        assert!(spec.is_valid(&json!("abc")));
        let errors = spec.conform(&json!("ABC")).unwrap_err();
        assert_eq!(errors[0].description, "matches?(/^[a-z]+$/)");
        assert!(spec.generate().is_err());
    }

    #[test]
    fn test_unknown_predicate() {
        let err = build(r#"{"or": ["string?", "uuid?"]}"#).unwrap_err();
        assert!(matches!(err, SpecError::UnknownPredicate(name) if name == "uuid?"));
    }

    #[test]
    fn test_invalid_regex() {
        assert!(matches!(build(r#"{"regex": "("}"#), Err(SpecError::Regex(_))));
    }

    #[test]
    fn test_structural_errors_surface() {
        let err = build(r#"{"and": ["string?"]}"#).unwrap_err();
        assert!(matches!(err, SpecError::InvalidSpec(_)));

        let err = build(r#"{"keys": {"req": {"a": "string?"}, "opt": {"a": "integer?"}}}"#)
            .unwrap_err();
        assert!(matches!(err, SpecError::InvalidSpec(_)));
    }

    #[test]
    fn test_custom_predicate_with_strategy() {
        let even = predicate_with_strategy("even?()", "integer", |v| {
            v.as_i64().is_some_and(|n| n % 2 == 0)
        })
        .unwrap();
        let registry = PredicateRegistry::builtin().with("even?", even);
        let spec = SpecDef::from_json(r#""even?""#).unwrap().build(&registry).unwrap();

        let values = spec.generate().unwrap().sample(10).unwrap();
        assert!(values.iter().all(|v| v.as_i64().unwrap() % 2 == 0));

        assert!(predicate_with_strategy("x", "uuid", |_| true).is_err());
    }
}
