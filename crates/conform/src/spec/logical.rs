//! Logical combinators: `sand`, `sor` and `alt`.

use serde_json::Value;

use super::Spec;
use crate::validation::{ConformResult, Conformed, Path, Violation};

/// Every child sees the original input; nothing is threaded between children.
pub(super) fn conform_and(children: &[Spec], path: &Path, input: &Value) -> ConformResult {
    let mut violations = Vec::new();
    for child in children {
        if let Err(errors) = child.conform_at(path, input) {
            violations.extend(errors);
        }
    }

    if violations.is_empty() {
        Ok(Conformed::Value(input.clone()))
    } else {
        Err(violations)
    }
}

/// Short-circuits on the first success; failure reports every child.
pub(super) fn conform_or(children: &[Spec], path: &Path, input: &Value) -> ConformResult {
    if children.is_empty() {
        return Err(vec![Violation::mismatch(path.clone(), input, "sor()")]);
    }
    let mut violations = Vec::new();
    for child in children {
        match child.conform_at(path, input) {
            Ok(conformed) => return Ok(conformed),
            Err(errors) => violations.extend(errors),
        }
    }
    Err(violations)
}

/// Branches are tried in declaration order at `path ++ [tag]`.
pub(super) fn conform_alt(
    branches: &[(String, Spec)],
    path: &Path,
    input: &Value,
) -> ConformResult {
    if branches.is_empty() {
        return Err(vec![Violation::mismatch(path.clone(), input, "alt()")]);
    }
    let mut violations: Vec<Violation> = Vec::new();
    for (tag, spec) in branches {
        match spec.conform_at(&path.tag(tag), input) {
            Ok(conformed) => {
                return Ok(Conformed::Branch {
                    tag: tag.clone(),
                    value: Box::new(conformed),
                });
            }
            Err(errors) => violations.extend(errors.into_iter().map(|mut v| {
                v.retag(tag);
                v
            })),
        }
    }
    Err(violations)
}
