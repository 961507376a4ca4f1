//! Conform performance benchmarks.
//!
//! Measures conforming flat, nested and failing inputs, and batch checks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

use conform::predicates::{boolean, integer, string};
use conform::{Engine, Spec, alt, cat, keys, lit, sand, sor};

fn person_spec() -> Spec {
    let id = alt([("num", integer()), ("str", string())]).unwrap();
    let address = keys()
        .req("city", string())
        .opt("zip", string())
        .build()
        .unwrap();
    keys()
        .req("id", id)
        .req("name", string())
        .req("address", address)
        .opt("active", boolean())
        .build()
        .unwrap()
}

/// Benchmark leaf and logical specs.
fn bench_leaf_specs(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_specs");
    let and = sand([string(), lit("foo")]).unwrap();
    let or = sor([string(), integer(), boolean()]).unwrap();

    group.bench_function("predicate_ok", |b| {
        b.iter(|| black_box(integer().conform(black_box(&json!(42)))))
    });

    group.bench_function("sand_fail", |b| {
        b.iter(|| black_box(and.conform(black_box(&json!(7)))))
    });

    group.bench_function("sor_last_branch", |b| {
        b.iter(|| black_box(or.conform(black_box(&json!(true)))))
    });

    group.finish();
}

/// Benchmark nested keys/cat/alt specs.
fn bench_nested_specs(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_specs");
    let person = person_spec();
    let ok = json!({"id": "p-1", "name": "Chris", "address": {"city": "Oslo"}, "extra": 1});
    let bad = json!({"id": null, "address": {"zip": 1}});

    group.bench_function("keys_ok", |b| b.iter(|| black_box(person.conform(&ok))));
    group.bench_function("keys_fail", |b| b.iter(|| black_box(person.conform(&bad))));

    let row = cat([("age", integer()), ("name", string()), ("active", boolean())]).unwrap();
    group.bench_function("cat_ok", |b| {
        b.iter(|| black_box(row.conform(&json!([31, "Chris", true]))))
    });

    group.finish();
}

/// Benchmark batch checks with varying batch sizes.
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_scaling");
    let engine = Engine::new();
    let person = person_spec();

    for size in [10, 100, 1000].iter() {
        let docs: Vec<Value> = (0..*size)
            .map(|i| {
                if i % 10 == 0 {
                    json!({"id": i, "address": {}})
                } else {
                    json!({"id": i, "name": format!("n{i}"), "address": {"city": "x"}})
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("check_all", size), &docs, |b, docs| {
            b.iter(|| black_box(engine.check_all(&person, docs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_leaf_specs, bench_nested_specs, bench_batch_scaling);
criterion_main!(benches);
