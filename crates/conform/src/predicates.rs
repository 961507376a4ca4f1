//! Built-in predicates.
//!
//! Each function returns a clone of a single shared predicate, so two calls to
//! `string()` produce equal specs.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::generate::GenStrategy;
use crate::spec::{Predicate, Spec};

static INTEGER: Lazy<Predicate> = Lazy::new(|| {
    Predicate::new("integer?()", |v| v.is_i64() || v.is_u64())
        .with_generator(GenStrategy::integer())
});

static POS_INTEGER: Lazy<Predicate> = Lazy::new(|| {
    Predicate::new("pos_integer?()", |v| {
        v.as_i64().is_some_and(|n| n > 0) || v.as_u64().is_some_and(|n| n > 0)
    })
    .with_generator(GenStrategy::Integer { min: 1, max: 1_000 })
});

static FLOAT: Lazy<Predicate> =
    Lazy::new(|| Predicate::new("float?()", Value::is_f64).with_generator(GenStrategy::float()));

static NUMBER: Lazy<Predicate> = Lazy::new(|| {
    Predicate::new("number?()", Value::is_number).with_generator(GenStrategy::number())
});

static STRING: Lazy<Predicate> = Lazy::new(|| {
    Predicate::new("string?()", Value::is_string).with_generator(GenStrategy::string())
});

static BOOLEAN: Lazy<Predicate> = Lazy::new(|| {
    Predicate::new("boolean?()", Value::is_boolean).with_generator(GenStrategy::Boolean)
});

static NULL: Lazy<Predicate> =
    Lazy::new(|| Predicate::new("null?()", Value::is_null).with_generator(GenStrategy::Null));

static MAP: Lazy<Predicate> = Lazy::new(|| Predicate::new("map?()", Value::is_object));

static LIST: Lazy<Predicate> = Lazy::new(|| Predicate::new("list?()", Value::is_array));

static ANY: Lazy<Predicate> =
    Lazy::new(|| Predicate::new("any?()", |_| true).with_generator(GenStrategy::Any));

pub fn integer() -> Spec {
    Spec::Predicate(INTEGER.clone())
}

/// Integers greater than zero.
pub fn pos_integer() -> Spec {
    Spec::Predicate(POS_INTEGER.clone())
}

/// Numbers with a fractional representation.
pub fn float() -> Spec {
    Spec::Predicate(FLOAT.clone())
}

pub fn number() -> Spec {
    Spec::Predicate(NUMBER.clone())
}

pub fn string() -> Spec {
    Spec::Predicate(STRING.clone())
}

pub fn boolean() -> Spec {
    Spec::Predicate(BOOLEAN.clone())
}

pub fn null() -> Spec {
    Spec::Predicate(NULL.clone())
}

/// Any object. Has no generator.
pub fn map() -> Spec {
    Spec::Predicate(MAP.clone())
}

/// Any array. Has no generator.
pub fn list() -> Spec {
    Spec::Predicate(LIST.clone())
}

pub fn any() -> Spec {
    Spec::Predicate(ANY.clone())
}

/// Built-ins with their registry names, in listing order.
pub(crate) fn builtins() -> Vec<(&'static str, Predicate)> {
    vec![
        ("integer?", INTEGER.clone()),
        ("pos_integer?", POS_INTEGER.clone()),
        ("float?", FLOAT.clone()),
        ("number?", NUMBER.clone()),
        ("string?", STRING.clone()),
        ("boolean?", BOOLEAN.clone()),
        ("null?", NULL.clone()),
        ("map?", MAP.clone()),
        ("list?", LIST.clone()),
        ("any?", ANY.clone()),
    ]
}
