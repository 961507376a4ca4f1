//! Engine facade: load definitions, conform batches and derive generators.

use std::path::Path;

use serde_json::Value;

use crate::definition::{PredicateRegistry, SpecDef};
use crate::error::Result;
use crate::generate::{Generator, GeneratorConfig};
use crate::spec::{Predicate, Spec};
use crate::validation::{ConformReport, ConformResult};

/// Configuration for an [`Engine`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Generator derivation and sampling settings.
    pub generator: GeneratorConfig,
}

/// Entry point bundling a predicate registry with configuration.
pub struct Engine {
    config: EngineConfig,
    registry: PredicateRegistry,
}

impl Engine {
    /// Create an engine with the built-in predicates and default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            registry: PredicateRegistry::builtin(),
        }
    }

    /// Replace the predicate registry.
    pub fn with_registry(mut self, registry: PredicateRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register an extra predicate for definitions to reference.
    pub fn with_predicate(mut self, name: impl Into<String>, predicate: Predicate) -> Self {
        self.registry.register(name, predicate);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &PredicateRegistry {
        &self.registry
    }

    /// Load and build a spec from a JSON definition file.
    pub fn load_spec(&self, path: impl AsRef<Path>) -> Result<Spec> {
        SpecDef::from_path(path)?.build(&self.registry)
    }

    /// Build a spec from JSON definition text.
    pub fn parse_spec(&self, src: &str) -> Result<Spec> {
        SpecDef::from_json(src)?.build(&self.registry)
    }

    pub fn conform(&self, spec: &Spec, input: &Value) -> ConformResult {
        spec.conform(input)
    }

    /// Conform every document and summarise the outcome.
    pub fn check_all<'a>(
        &self,
        spec: &Spec,
        documents: impl IntoIterator<Item = &'a Value>,
    ) -> ConformReport {
        let mut report = ConformReport::new(spec.description());
        for document in documents {
            report.record(spec.conform(document).err());
        }
        tracing::debug!(
            documents = report.documents,
            failed = report.failed,
            "checked batch"
        );
        report
    }

    /// Derive a generator using the engine's generator configuration.
    pub fn generate(&self, spec: &Spec) -> Result<Generator> {
        spec.generate_with(&self.config.generator)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
