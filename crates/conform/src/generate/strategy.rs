//! Pre-registered sampling strategies for predicate generators.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SpecError};

/// Default bounds used by the named strategies.
const DEFAULT_INT_BOUND: i64 = 1_000;
const DEFAULT_FLOAT_BOUND: f64 = 1_000.0;
const DEFAULT_STRING_MAX_LEN: usize = 16;

/// How a predicate samples candidate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenStrategy {
    /// Integers in `min..=max`.
    Integer { min: i64, max: i64 },
    /// Non-integral floats in `min..max`.
    Float { min: f64, max: f64 },
    /// Integers or floats in `min..=max`.
    Number { min: f64, max: f64 },
    Boolean,
    /// Alphanumeric strings of up to `max_len` characters.
    String { max_len: usize },
    Null,
    /// Any scalar.
    Any,
}

impl GenStrategy {
    pub fn integer() -> Self {
        GenStrategy::Integer {
            min: -DEFAULT_INT_BOUND,
            max: DEFAULT_INT_BOUND,
        }
    }

    pub fn float() -> Self {
        GenStrategy::Float {
            min: -DEFAULT_FLOAT_BOUND,
            max: DEFAULT_FLOAT_BOUND,
        }
    }

    pub fn number() -> Self {
        GenStrategy::Number {
            min: -DEFAULT_FLOAT_BOUND,
            max: DEFAULT_FLOAT_BOUND,
        }
    }

    pub fn string() -> Self {
        GenStrategy::String {
            max_len: DEFAULT_STRING_MAX_LEN,
        }
    }

    /// Look up a strategy by its registered name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "integer" => Ok(Self::integer()),
            "float" => Ok(Self::float()),
            "number" => Ok(Self::number()),
            "boolean" => Ok(GenStrategy::Boolean),
            "string" => Ok(Self::string()),
            "null" => Ok(GenStrategy::Null),
            "any" => Ok(GenStrategy::Any),
            other => Err(SpecError::UnknownStrategy(other.to_string())),
        }
    }

    /// Registered name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            GenStrategy::Integer { .. } => "integer",
            GenStrategy::Float { .. } => "float",
            GenStrategy::Number { .. } => "number",
            GenStrategy::Boolean => "boolean",
            GenStrategy::String { .. } => "string",
            GenStrategy::Null => "null",
            GenStrategy::Any => "any",
        }
    }

    /// Reject bounds that cannot be sampled: `min > max` or non-finite floats.
    pub fn validate(&self) -> Result<()> {
        let ok = match self {
            GenStrategy::Integer { min, max } => min <= max,
            GenStrategy::Float { min, max } | GenStrategy::Number { min, max } => {
                min.is_finite() && max.is_finite() && min <= max
            }
            _ => true,
        };
        if ok {
            Ok(())
        } else {
            Err(SpecError::InvalidSpec(format!(
                "{} strategy has unusable bounds: {:?}",
                self.name(),
                self
            )))
        }
    }

    /// Draw one value. Bounds are assumed to have passed [`GenStrategy::validate`].
    pub(crate) fn sample(&self, rng: &mut fastrand::Rng) -> Value {
        match self {
            GenStrategy::Integer { min, max } => Value::from(sample_int(rng, *min, *max)),
            GenStrategy::Float { min, max } => Value::from(sample_float(rng, *min, *max)),
            GenStrategy::Number { min, max } => {
                let (lo, hi) = (min.ceil(), max.floor());
                if lo <= hi && rng.bool() {
                    Value::from(sample_int(rng, lo as i64, hi as i64))
                } else {
                    Value::from(sample_float(rng, *min, *max))
                }
            }
            GenStrategy::Boolean => Value::Bool(rng.bool()),
            GenStrategy::String { max_len } => {
                let len = rng.usize(0..=*max_len);
                Value::String((0..len).map(|_| rng.alphanumeric()).collect())
            }
            GenStrategy::Null => Value::Null,
            GenStrategy::Any => match rng.u8(0..5) {
                0 => Value::Null,
                1 => Value::Bool(rng.bool()),
                2 => Self::integer().sample(rng),
                3 => Self::float().sample(rng),
                _ => Self::string().sample(rng),
            },
        }
    }
}

fn sample_int(rng: &mut fastrand::Rng, min: i64, max: i64) -> i64 {
    if min >= max { min } else { rng.i64(min..=max) }
}

/// Floats with a zero fractional part are nudged so they stay non-integral,
/// as long as the nudge stays inside `min..=max`.
fn sample_float(rng: &mut fastrand::Rng, min: f64, max: f64) -> f64 {
    let x = (min + rng.f64() * (max - min)).clamp(min, max);
    if x.fract() != 0.0 {
        x
    } else if x + 0.5 <= max {
        x + 0.5
    } else if x - 0.5 >= min {
        x - 0.5
    } else {
        x
    }
}
