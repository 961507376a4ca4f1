//! Shape combinators: `keys` for objects and `cat` for positional arrays.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{Keys, Spec};
use crate::error::{Result, SpecError};
use crate::validation::{ConformResult, Conformed, Path, Violation, ViolationKind};

/// Builder for a keys spec.
#[derive(Debug, Default)]
pub struct KeysBuilder {
    required: Vec<(String, Spec)>,
    optional: Vec<(String, Spec)>,
}

impl KeysBuilder {
    /// Add a required key.
    pub fn req(mut self, key: impl Into<String>, spec: Spec) -> Self {
        self.required.push((key.into(), spec));
        self
    }

    /// Add an optional key.
    pub fn opt(mut self, key: impl Into<String>, spec: Spec) -> Self {
        self.optional.push((key.into(), spec));
        self
    }

    /// Finish the spec. Keys must be unique across required and optional.
    pub fn build(self) -> Result<Spec> {
        let mut keys = Keys::default();
        for (key, spec) in self.required {
            insert_unique(&mut keys, true, key, spec)?;
        }
        for (key, spec) in self.optional {
            insert_unique(&mut keys, false, key, spec)?;
        }
        Ok(Spec::Keys(keys))
    }
}

fn insert_unique(keys: &mut Keys, required: bool, key: String, spec: Spec) -> Result<()> {
    if keys.required.contains_key(&key) || keys.optional.contains_key(&key) {
        return Err(SpecError::InvalidSpec(format!("keys has duplicate key '{key}'")));
    }
    let target: &mut IndexMap<String, Spec> = if required {
        &mut keys.required
    } else {
        &mut keys.optional
    };
    target.insert(key, spec);
    Ok(())
}

/// Output keeps recognised keys with their original values.
pub(super) fn conform_keys(keys: &Keys, path: &Path, input: &Value) -> ConformResult {
    let Some(map) = input.as_object() else {
        return Err(vec![Violation::new(
            ViolationKind::NotAMap,
            path.clone(),
            input.clone(),
            "not a map",
        )]);
    };

    let mut violations = Vec::new();
    let mut out = Map::new();

    for (key, spec) in &keys.required {
        match map.get(key) {
            Some(value) => check_entry(key, spec, value, path, &mut out, &mut violations),
            None => violations.push(Violation::new(
                ViolationKind::RequiredKeyMissing,
                path.key(key),
                input.clone(),
                "required",
            )),
        }
    }

    for (key, spec) in &keys.optional {
        if let Some(value) = map.get(key) {
            check_entry(key, spec, value, path, &mut out, &mut violations);
        }
    }

    if violations.is_empty() {
        Ok(Conformed::Value(Value::Object(out)))
    } else {
        Err(violations)
    }
}

fn check_entry(
    key: &str,
    spec: &Spec,
    value: &Value,
    path: &Path,
    out: &mut Map<String, Value>,
    violations: &mut Vec<Violation>,
) {
    match spec.conform_at(&path.key(key), value) {
        Ok(_) => {
            out.insert(key.to_string(), value.clone());
        }
        Err(errors) => violations.extend(errors),
    }
}

/// Extra elements past the declared arity are ignored.
pub(super) fn conform_cat(
    positions: &[(String, Spec)],
    path: &Path,
    input: &Value,
) -> ConformResult {
    let Some(items) = input.as_array() else {
        return Err(vec![Violation::new(
            ViolationKind::NotASequence,
            path.clone(),
            input.clone(),
            "not a sequence",
        )]);
    };

    let mut violations = Vec::new();
    let mut out = Vec::with_capacity(positions.len());

    for (i, (tag, spec)) in positions.iter().enumerate() {
        let at = path.index(i);
        match items.get(i) {
            Some(item) => match spec.conform_at(&at, item) {
                Ok(conformed) => out.push((tag.clone(), conformed)),
                Err(errors) => violations.extend(errors.into_iter().map(|mut v| {
                    v.retag(tag);
                    v
                })),
            },
            None => violations.push(
                Violation::new(ViolationKind::InsufficientInput, at, Value::Null, "Insufficient input")
                    .with_tag(tag.as_str()),
            ),
        }
    }

    if violations.is_empty() {
        Ok(Conformed::Tagged(out))
    } else {
        Err(violations)
    }
}
