//! Generator configuration.

use serde::{Deserialize, Serialize};

/// Whether generated objects include optional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalKeys {
    /// Only required keys are generated.
    Never,
    /// Each optional key with a generator is included with probability 1/2.
    #[default]
    Sometimes,
    /// Every optional key with a generator is included.
    Always,
}

/// How an alt spec picks the branch to generate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AltSelection {
    /// Always the first branch that can generate.
    First,
    /// A uniformly random branch among those that can generate.
    #[default]
    Random,
}

/// Configuration for generator derivation and sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed RNG seed. `None` seeds every generator independently.
    pub seed: Option<u64>,
    /// Optional key policy for keys specs.
    pub optional_keys: OptionalKeys,
    /// Branch policy for alt specs.
    pub alt_selection: AltSelection,
    /// Candidates drawn by a filtered generator before it gives up.
    pub max_filter_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            optional_keys: OptionalKeys::default(),
            alt_selection: AltSelection::default(),
            max_filter_attempts: 100,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_optional_keys(mut self, policy: OptionalKeys) -> Self {
        self.optional_keys = policy;
        self
    }

    pub fn with_alt_selection(mut self, policy: AltSelection) -> Self {
        self.alt_selection = policy;
        self
    }

    pub fn with_max_filter_attempts(mut self, attempts: usize) -> Self {
        self.max_filter_attempts = attempts;
        self
    }
}
