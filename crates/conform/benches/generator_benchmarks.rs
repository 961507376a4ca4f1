//! Generator performance benchmarks.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use conform::predicates::{integer, pos_integer, string};
use conform::{GeneratorConfig, OptionalKeys, alt, cat, keys, pred, sand};

/// Benchmark plan compilation and sampling.
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    let config = GeneratorConfig::default()
        .with_seed(42)
        .with_optional_keys(OptionalKeys::Always);

    let row = cat([("id", pos_integer()), ("name", string())]).unwrap();
    let record = keys()
        .req("row", row.clone())
        .opt("kind", alt([("num", integer()), ("str", string())]).unwrap())
        .build()
        .unwrap();

    group.bench_function("compile", |b| {
        b.iter(|| black_box(record.generate_with(&config).unwrap()))
    });

    group.bench_function("sample_100_cat", |b| {
        let mut generator = row.generate_with(&config).unwrap();
        b.iter(|| black_box(generator.sample(100).unwrap()))
    });

    group.bench_function("sample_100_keys", |b| {
        let mut generator = record.generate_with(&config).unwrap();
        b.iter(|| black_box(generator.sample(100).unwrap()))
    });

    // Roughly half the candidates are rejected
    let even = pred("even?()", |v| v.as_i64().is_some_and(|n| n % 2 == 0));
    let filtered = sand([integer(), even]).unwrap();
    group.bench_function("sample_100_filtered", |b| {
        let mut generator = filtered.generate_with(&config).unwrap();
        b.iter(|| black_box(generator.sample(100).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
