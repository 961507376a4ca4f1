//! Name to predicate registry used when building specs from definitions.

use indexmap::IndexMap;

use crate::predicates;
use crate::spec::Predicate;

/// Registered predicates, addressable by name.
#[derive(Debug, Clone, Default)]
pub struct PredicateRegistry {
    predicates: IndexMap<String, Predicate>,
}

impl PredicateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in predicates (`integer?`, `string?`, ...).
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, predicate) in predicates::builtins() {
            registry.register(name, predicate);
        }
        registry
    }

    /// Register a predicate, returning any predicate it replaced.
    pub fn register(&mut self, name: impl Into<String>, predicate: Predicate) -> Option<Predicate> {
        self.predicates.insert(name.into(), predicate)
    }

    /// Register a predicate, builder style.
    pub fn with(mut self, name: impl Into<String>, predicate: Predicate) -> Self {
        self.register(name, predicate);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered predicates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.predicates.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
