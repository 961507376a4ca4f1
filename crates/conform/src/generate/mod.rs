//! Generator derivation.
//!
//! A spec is compiled once into a [`Plan`], an immutable description of how to
//! draw values. Any node that cannot generate fails the compile, so
//! `Spec::generate` reports `GeneratorUnavailable` before a single value is
//! drawn. Each [`Generator`] owns its plan and RNG; generating twice from the
//! same spec yields two independent sequences.

mod config;
mod strategy;

use serde_json::{Map, Value};

use crate::error::{Result, SpecError};
use crate::spec::Spec;

pub use config::{AltSelection, GeneratorConfig, OptionalKeys};
pub use strategy::GenStrategy;

/// Compiled generation plan.
#[derive(Debug, Clone)]
enum Plan {
    Constant(Value),
    Sample(GenStrategy),
    /// Draw from `source` until `spec` accepts the candidate.
    Filter { source: Box<Plan>, spec: Spec },
    OneOf(Vec<Plan>),
    Object {
        required: Vec<(String, Plan)>,
        optional: Vec<(String, Plan)>,
    },
    Sequence(Vec<Plan>),
}

fn compile(spec: &Spec, config: &GeneratorConfig) -> Result<Plan> {
    match spec {
        Spec::Predicate(p) => match p.strategy() {
            Some(strategy) => {
                strategy.validate()?;
                Ok(Plan::Filter {
                    source: Box::new(Plan::Sample(strategy.clone())),
                    spec: spec.clone(),
                })
            }
            None => Err(SpecError::unavailable(
                p.description(),
                "predicate has no generator strategy",
            )),
        },

        Spec::Literal(value) => Ok(Plan::Constant(value.clone())),

        Spec::And(children) => {
            let mut usable: Vec<Plan> = children
                .iter()
                .filter_map(|child| compile(child, config).ok())
                .collect();
            match usable.pop() {
                Some(source) if usable.is_empty() => Ok(Plan::Filter {
                    source: Box::new(source),
                    spec: spec.clone(),
                }),
                Some(_) => Err(SpecError::unavailable(
                    spec.description(),
                    format!("ambiguous, {} children can generate", usable.len() + 1),
                )),
                None => Err(SpecError::unavailable(
                    spec.description(),
                    "no child can generate",
                )),
            }
        }

        Spec::Or(children) => children
            .iter()
            .find_map(|child| compile(child, config).ok())
            .ok_or_else(|| SpecError::unavailable(spec.description(), "no child can generate")),

        Spec::Keys(keys) => {
            let required = keys
                .required
                .iter()
                .map(|(key, child)| Ok((key.clone(), compile(child, config)?)))
                .collect::<Result<Vec<_>>>()?;

            let optional = match config.optional_keys {
                OptionalKeys::Never => Vec::new(),
                OptionalKeys::Sometimes | OptionalKeys::Always => keys
                    .optional
                    .iter()
                    .filter_map(|(key, child)| {
                        compile(child, config).ok().map(|plan| (key.clone(), plan))
                    })
                    .collect(),
            };

            Ok(Plan::Object { required, optional })
        }

        Spec::Cat(positions) => positions
            .iter()
            .map(|(_, child)| compile(child, config))
            .collect::<Result<Vec<_>>>()
            .map(Plan::Sequence),

        Spec::Alt(branches) => {
            let mut usable = branches
                .iter()
                .filter_map(|(_, child)| compile(child, config).ok());
            let mut plans: Vec<Plan> = match config.alt_selection {
                AltSelection::First => usable.next().into_iter().collect(),
                AltSelection::Random => usable.collect(),
            };
            match plans.len() {
                0 => Err(SpecError::unavailable(
                    spec.description(),
                    "no branch can generate",
                )),
                1 => Ok(plans.remove(0)),
                _ => Ok(Plan::OneOf(plans)),
            }
        }
    }
}

/// Lazy, infinite sequence of values accepted by a spec.
///
/// Iteration ends only if a filtered node exhausts its attempts; use
/// [`Generator::next_value`] to see that error.
#[derive(Debug)]
pub struct Generator {
    plan: Plan,
    sampler: Sampler,
    stopped: bool,
}

impl Generator {
    pub(crate) fn new(spec: &Spec, config: &GeneratorConfig) -> Result<Self> {
        let plan = compile(spec, config)?;
        tracing::debug!(spec = %spec.description(), seed = ?config.seed, "compiled generator");

        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        Ok(Self {
            plan,
            sampler: Sampler {
                rng,
                optional_keys: config.optional_keys,
                max_filter_attempts: config.max_filter_attempts,
            },
            stopped: false,
        })
    }

    /// Draw the next value.
    pub fn next_value(&mut self) -> Result<Value> {
        self.sampler.draw(&self.plan)
    }

    /// Draw `n` values.
    pub fn sample(&mut self, n: usize) -> Result<Vec<Value>> {
        (0..n).map(|_| self.next_value()).collect()
    }
}

/// Mutable sampling state, kept apart from the plan it walks.
#[derive(Debug)]
struct Sampler {
    rng: fastrand::Rng,
    optional_keys: OptionalKeys,
    max_filter_attempts: usize,
}

impl Sampler {
    fn draw(&mut self, plan: &Plan) -> Result<Value> {
        match plan {
            Plan::Constant(value) => Ok(value.clone()),
            Plan::Sample(strategy) => Ok(strategy.sample(&mut self.rng)),
            Plan::Filter { source, spec } => {
                for _ in 0..self.max_filter_attempts {
                    let candidate = self.draw(source)?;
                    if spec.is_valid(&candidate) {
                        return Ok(candidate);
                    }
                }
                Err(SpecError::GenerationExhausted {
                    spec: spec.description(),
                    attempts: self.max_filter_attempts,
                })
            }
            Plan::OneOf(plans) => {
                let i = self.rng.usize(..plans.len());
                self.draw(&plans[i])
            }
            Plan::Object { required, optional } => {
                let mut map = Map::new();
                for (key, plan) in required {
                    map.insert(key.clone(), self.draw(plan)?);
                }
                for (key, plan) in optional {
                    let include = match self.optional_keys {
                        OptionalKeys::Never => false,
                        OptionalKeys::Sometimes => self.rng.bool(),
                        OptionalKeys::Always => true,
                    };
                    if include {
                        map.insert(key.clone(), self.draw(plan)?);
                    }
                }
                Ok(Value::Object(map))
            }
            Plan::Sequence(plans) => plans
                .iter()
                .map(|plan| self.draw(plan))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
        }
    }
}

impl Iterator for Generator {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.stopped {
            return None;
        }
        match self.next_value() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "generator stopped");
                self.stopped = true;
                None
            }
        }
    }
}
