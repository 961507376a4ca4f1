//! Integration tests for conforming values against specs.

use serde_json::{Value, json};

use conform::predicates::{boolean, integer, string};
use conform::{
    Conformed, PathSegment, Spec, ViolationKind, alt, build, cat, conform, keys, lit, pred, sand,
    sor,
};

fn descriptions(errors: &[conform::Violation]) -> Vec<&str> {
    errors.iter().map(|e| e.description.as_str()).collect()
}

// =============================================================================
// Predicates and Literals
// =============================================================================

#[test]
fn test_predicate_success_returns_input() {
    let is_integer = pred("is_integer()", |v| v.is_i64());
    assert_eq!(conform(&is_integer, &json!(42)), Ok(Conformed::Value(json!(42))));
}

#[test]
fn test_predicate_failure_message() {
    let is_integer = pred("is_integer()", |v| v.is_i64());
    let errors = conform(&is_integer, &json!("42")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].path.is_root());
    assert_eq!(errors[0].to_string(), "val: \"42\" fails: is_integer()");
}

#[test]
fn test_literal_matches_any_value_kind() {
    for value in [json!("foo"), json!(1), json!(true), json!(null), json!([1, {"a": 2}])] {
        let spec = lit(value.clone());
        assert!(spec.is_valid(&value));
        assert!(!spec.is_valid(&json!("something else")));
    }
}

// =============================================================================
// sand / sor
// =============================================================================

#[test]
fn test_sand_reports_both_children_in_order() {
    let spec = sand([string(), lit("foo")]).unwrap();
    let errors = conform(&spec, &json!(7)).unwrap_err();
    assert_eq!(descriptions(&errors), vec!["string?()", "\"foo\""]);
}

#[test]
fn test_sand_does_not_thread_conformed_values() {
    // A cat child would tag its output; sand still returns the original input
    let spec = sand([cat([("n", integer())]).unwrap(), pred("list?", Value::is_array)]).unwrap();
    assert_eq!(conform(&spec, &json!([1])), Ok(Conformed::Value(json!([1]))));
}

#[test]
fn test_sor_reports_every_child() {
    let spec = sor([string(), integer()]).unwrap();
    let errors = conform(&spec, &json!(false)).unwrap_err();
    assert_eq!(descriptions(&errors), vec!["string?()", "integer?()"]);
}

#[test]
fn test_sor_short_circuits() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counting = pred("counting?()", move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        true
    });

    let spec = sor([string(), counting]).unwrap();
    assert!(spec.is_valid(&json!("hit")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// keys
// =============================================================================

#[test]
fn test_keys_missing_required() {
    let spec = keys().req("foo", string()).build().unwrap();
    let errors = conform(&spec, &json!({})).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ViolationKind::RequiredKeyMissing);
    assert_eq!(errors[0].path.segments(), &[PathSegment::Key("foo".into())]);
}

#[test]
fn test_keys_drops_undeclared() {
    let spec = keys().req("foo", string()).build().unwrap();
    let conformed = conform(&spec, &json!({"foo": "foo", "bar": "bar"})).unwrap();
    assert_eq!(conformed.into_value(), json!({"foo": "foo"}));
}

#[test]
fn test_keys_nested_paths() {
    let address = keys().req("city", string()).build().unwrap();
    let spec = keys()
        .req("name", string())
        .req("address", address)
        .build()
        .unwrap();

    let errors = conform(&spec, &json!({"name": 1, "address": {"city": 2}})).unwrap_err();
    let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["name", "address/city"]);
    assert_eq!(errors[1].to_string(), "in: address/city val: 2 fails: string?()");
}

// =============================================================================
// cat / alt
// =============================================================================

#[test]
fn test_cat_insufficient_input_tagged() {
    let spec = cat([("age", integer()), ("name", string())]).unwrap();
    let errors = conform(&spec, &json!([31])).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ViolationKind::InsufficientInput);
    assert_eq!(errors[0].at.as_deref(), Some("name"));
    assert_eq!(errors[0].path.segments(), &[PathSegment::Index(1)]);
}

#[test]
fn test_cat_success_tagged_output() {
    let spec = cat([("age", integer()), ("name", string())]).unwrap();
    let conformed = conform(&spec, &json!([31, "Chris"])).unwrap();

    assert_eq!(conformed.get("age"), Some(&Conformed::Value(json!(31))));
    assert_eq!(conformed.get("name"), Some(&Conformed::Value(json!("Chris"))));
    assert_eq!(conformed.into_value(), json!({"age": 31, "name": "Chris"}));
}

#[test]
fn test_cat_mismatch_tagged_with_position() {
    let spec = cat([("age", integer()), ("name", string())]).unwrap();
    let errors = conform(&spec, &json!(["31", 31])).unwrap_err();

    let tags: Vec<_> = errors.iter().map(|e| e.at.as_deref()).collect();
    assert_eq!(tags, vec![Some("age"), Some("name")]);
}

#[test]
fn test_alt_reports_every_branch_in_order() {
    let spec = alt([("num", integer()), ("str", string())]).unwrap();
    let errors = conform(&spec, &json!(true)).unwrap_err();

    let tags: Vec<_> = errors.iter().map(|e| e.at.as_deref()).collect();
    assert_eq!(tags, vec![Some("num"), Some("str")]);
    assert_eq!(descriptions(&errors), vec!["integer?()", "string?()"]);
}

#[test]
fn test_alt_first_declared_wins() {
    let spec = alt([("any_int", integer()), ("exact", lit(3))]).unwrap();
    let conformed = conform(&spec, &json!(3)).unwrap();
    assert_eq!(conformed.tags(), vec!["any_int"]);
}

#[test]
fn test_alt_inside_cat() {
    let id = alt([("num", integer()), ("str", string())]).unwrap();
    let spec = cat([("id", id), ("active", boolean())]).unwrap();

    let conformed = conform(&spec, &json!(["abc", true])).unwrap();
    assert_eq!(conformed.into_value(), json!({"id": {"str": "abc"}, "active": true}));

    let errors = conform(&spec, &json!([null, true])).unwrap_err();
    assert_eq!(errors.len(), 2);
    // The cat position owns every error; the alt branch stays in the path
    let tags: Vec<_> = errors.iter().map(|e| e.at.as_deref()).collect();
    assert_eq!(tags, vec![Some("id"), Some("id")]);
    assert_eq!(errors[0].path.to_string(), "0/:num");
    assert_eq!(errors[1].path.to_string(), "0/:str");
}

// =============================================================================
// build / concurrency
// =============================================================================

#[test]
fn test_build_idempotent_on_composite() {
    let spec = keys()
        .req("row", cat([("a", integer())]).unwrap())
        .opt("kind", alt([("x", lit("x")), ("y", lit("y"))]).unwrap())
        .build()
        .unwrap();
    assert_eq!(build(build(spec.clone())), spec);
}

#[test]
fn test_shared_spec_across_threads() {
    let spec: Spec = cat([("age", integer()), ("name", string())]).unwrap();
    let spec = std::sync::Arc::new(spec);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let spec = std::sync::Arc::clone(&spec);
            std::thread::spawn(move || {
                (0..100).all(|n| spec.is_valid(&json!([n + i, "x"])))
                    && !spec.is_valid(&json!([i]))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
