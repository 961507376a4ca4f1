//! Specs: composable, immutable validation and generation units.
//!
//! A [`Spec`] is plain data. Leaves are predicates and literals; combinators
//! (`sand`, `sor`, `keys`, `cat`, `alt`) hold child specs. Conforming walks the
//! tree, threading a [`Path`] down and merging child violations back up.

mod logical;
mod predicate;
mod shape;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Result, SpecError};
use crate::generate::{Generator, GeneratorConfig};
use crate::validation::{ConformResult, Path};

pub use predicate::{Predicate, PredicateFn};
pub use shape::KeysBuilder;

/// A composable spec.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    /// Boolean function with a description.
    Predicate(Predicate),
    /// Accepts only values structurally equal to this one.
    Literal(Value),
    /// Every child must accept the input.
    And(Vec<Spec>),
    /// The first child that accepts the input wins.
    Or(Vec<Spec>),
    /// Object with required and optional keys.
    Keys(Keys),
    /// Fixed-arity positional sequence with tagged positions.
    Cat(Vec<(String, Spec)>),
    /// Tagged alternatives over a single value.
    Alt(Vec<(String, Spec)>),
}

/// Key to spec mappings of a keys spec, in declaration order.
///
/// Built through [`keys`], which keeps keys unique across both groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Keys {
    pub(crate) required: IndexMap<String, Spec>,
    pub(crate) optional: IndexMap<String, Spec>,
}

impl Keys {
    pub fn required(&self) -> &IndexMap<String, Spec> {
        &self.required
    }

    pub fn optional(&self) -> &IndexMap<String, Spec> {
        &self.optional
    }
}

impl Spec {
    /// Conform `input` at the root path.
    pub fn conform(&self, input: &Value) -> ConformResult {
        self.conform_at(&Path::root(), input)
    }

    /// Conform `input`, reporting violations relative to `path`.
    pub fn conform_at(&self, path: &Path, input: &Value) -> ConformResult {
        match self {
            Spec::Predicate(p) => p.conform_at(path, input),
            Spec::Literal(literal) => predicate::conform_literal(literal, path, input),
            Spec::And(children) => logical::conform_and(children, path, input),
            Spec::Or(children) => logical::conform_or(children, path, input),
            Spec::Keys(keys) => shape::conform_keys(keys, path, input),
            Spec::Cat(positions) => shape::conform_cat(positions, path, input),
            Spec::Alt(branches) => logical::conform_alt(branches, path, input),
        }
    }

    /// True when `input` conforms.
    pub fn is_valid(&self, input: &Value) -> bool {
        self.conform(input).is_ok()
    }

    /// Derive a generator with the default configuration.
    pub fn generate(&self) -> Result<Generator> {
        self.generate_with(&GeneratorConfig::default())
    }

    /// Derive a generator.
    pub fn generate_with(&self, config: &GeneratorConfig) -> Result<Generator> {
        Generator::new(self, config)
    }

    /// Readable rendering of the spec tree.
    pub fn description(&self) -> String {
        match self {
            Spec::Predicate(p) => p.description().to_string(),
            Spec::Literal(value) => predicate::literal_description(value),
            Spec::And(children) => format!("sand({})", join_descriptions(children)),
            Spec::Or(children) => format!("sor({})", join_descriptions(children)),
            Spec::Keys(keys) => format!(
                "keys(req: [{}], opt: [{}])",
                join_tagged(keys.required.iter()),
                join_tagged(keys.optional.iter())
            ),
            Spec::Cat(positions) => {
                format!("cat({})", join_tagged(positions.iter().map(|(t, s)| (t, s))))
            }
            Spec::Alt(branches) => {
                format!("alt({})", join_tagged(branches.iter().map(|(t, s)| (t, s))))
            }
        }
    }

    /// Short name of the spec variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Spec::Predicate(_) => "predicate",
            Spec::Literal(_) => "literal",
            Spec::And(_) => "and",
            Spec::Or(_) => "or",
            Spec::Keys(_) => "keys",
            Spec::Cat(_) => "cat",
            Spec::Alt(_) => "alt",
        }
    }
}

impl From<Predicate> for Spec {
    fn from(predicate: Predicate) -> Self {
        Spec::Predicate(predicate)
    }
}

/// Convert a bare predicate or an already-built spec into a [`Spec`].
///
/// Building a spec that is already built returns it unchanged.
pub fn build(raw: impl Into<Spec>) -> Spec {
    raw.into()
}

/// Conform `input` against `spec`.
pub fn conform(spec: &Spec, input: &Value) -> ConformResult {
    spec.conform(input)
}

/// Derive a generator for `spec` with the default configuration.
pub fn generate(spec: &Spec) -> Result<Generator> {
    spec.generate()
}

/// Spec from a description and a test function.
pub fn pred(
    description: impl Into<String>,
    test: impl Fn(&Value) -> bool + Send + Sync + 'static,
) -> Spec {
    Spec::Predicate(Predicate::new(description, test))
}

/// Spec accepting only `value`.
pub fn lit(value: impl Into<Value>) -> Spec {
    Spec::Literal(value.into())
}

/// Conjunction of two or more specs, each applied to the same input.
pub fn sand(children: impl IntoIterator<Item = Spec>) -> Result<Spec> {
    let children = at_least_two("sand", children)?;
    Ok(Spec::And(children))
}

/// Disjunction of two or more specs; the first success wins.
pub fn sor(children: impl IntoIterator<Item = Spec>) -> Result<Spec> {
    let children = at_least_two("sor", children)?;
    Ok(Spec::Or(children))
}

/// Start a keys spec.
pub fn keys() -> KeysBuilder {
    KeysBuilder::default()
}

/// Positional sequence spec from `(tag, spec)` pairs.
pub fn cat<T: Into<String>>(positions: impl IntoIterator<Item = (T, Spec)>) -> Result<Spec> {
    Ok(Spec::Cat(tagged_pairs("cat", positions)?))
}

/// Tagged alternatives from `(tag, spec)` pairs.
pub fn alt<T: Into<String>>(branches: impl IntoIterator<Item = (T, Spec)>) -> Result<Spec> {
    Ok(Spec::Alt(tagged_pairs("alt", branches)?))
}

fn at_least_two(name: &str, children: impl IntoIterator<Item = Spec>) -> Result<Vec<Spec>> {
    let children: Vec<Spec> = children.into_iter().collect();
    if children.len() < 2 {
        return Err(SpecError::InvalidSpec(format!(
            "{name} needs at least two specs, got {}",
            children.len()
        )));
    }
    Ok(children)
}

fn tagged_pairs<T: Into<String>>(
    name: &str,
    pairs: impl IntoIterator<Item = (T, Spec)>,
) -> Result<Vec<(String, Spec)>> {
    let mut out: Vec<(String, Spec)> = Vec::new();
    for (tag, spec) in pairs {
        let tag = tag.into();
        if out.iter().any(|(existing, _)| *existing == tag) {
            return Err(SpecError::InvalidSpec(format!("{name} has duplicate tag '{tag}'")));
        }
        out.push((tag, spec));
    }
    if out.is_empty() {
        return Err(SpecError::InvalidSpec(format!("{name} needs at least one tagged spec")));
    }
    Ok(out)
}

fn join_descriptions(specs: &[Spec]) -> String {
    specs
        .iter()
        .map(Spec::description)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_tagged<'a>(pairs: impl Iterator<Item = (&'a String, &'a Spec)>) -> String {
    pairs
        .map(|(tag, spec)| format!("{tag}: {}", spec.description()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{integer, string};
    use serde_json::json;

    #[test]
    fn test_build_is_idempotent() {
        let spec = sand([string(), lit("foo")]).unwrap();
        assert_eq!(build(build(spec.clone())), build(spec));
    }

    #[test]
    fn test_build_bare_predicate() {
        let p = Predicate::new("odd?()", |v| v.as_i64().is_some_and(|n| n % 2 != 0));
        let spec = build(p.clone());
        assert_eq!(spec, Spec::Predicate(p));
        assert!(spec.is_valid(&json!(3)));
    }

    #[test]
    fn test_sand_requires_two_children() {
        let err = sand([string()]).unwrap_err();
        assert!(matches!(err, SpecError::InvalidSpec(_)));
        assert!(sor(Vec::new()).is_err());
    }

    #[test]
    fn test_cat_rejects_duplicate_tags() {
        let err = cat([("a", integer()), ("a", string())]).unwrap_err();
        assert!(err.to_string().contains("duplicate tag 'a'"));
        assert!(alt(Vec::<(&str, Spec)>::new()).is_err());
    }

    #[test]
    fn test_description_renders_tree() {
        let spec = cat([
            ("age", integer()),
            ("name", sor([string(), lit(json!(null))]).unwrap()),
        ])
        .unwrap();
        assert_eq!(
            spec.description(),
            "cat(age: integer?(), name: sor(string?(), null))"
        );

        let k = keys().req("foo", string()).opt("bar", integer()).build().unwrap();
        assert_eq!(k.description(), "keys(req: [foo: string?()], opt: [bar: integer?()])");
    }

    #[test]
    fn test_specs_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Spec>();
    }
}
