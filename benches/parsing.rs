//! Criterion benchmarks for model path parsing and rendering.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use model_path::{ModelPath, ModelPathRef, merge};

const INPUTS: [(&str, &str); 5] = [
    ("name", "mistral"),
    ("name_tag", "mistral:latest"),
    ("typical", "example.com/mistral:7b+Q4_0"),
    (
        "full",
        "https://registry.example.com/library/mistral:7b+q4_k_m",
    ),
    ("invalid", "mistral:7b+Q4_0:latest"),
];

/// Benchmark: borrowed scan versus owned parse
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, input) in INPUTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("borrowed", name), &input, |b, input| {
            b.iter(|| ModelPathRef::parse(black_box(input)));
        });
        group.bench_with_input(BenchmarkId::new("owned", name), &input, |b, input| {
            b.iter(|| ModelPath::parse(black_box(input)));
        });
    }

    group.finish();
}

/// Benchmark: the textual renderings
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let p = ModelPath::parse("registry.example.com/library/mistral:7b+Q4_0");

    group.bench_function("display", |b| b.iter(|| black_box(&p).to_string()));
    group.bench_function("full", |b| b.iter(|| black_box(&p).full()));
    group.bench_function("name_tag_and_build", |b| {
        b.iter(|| black_box(&p).name_tag_and_build());
    });

    group.finish();
}

/// Benchmark: filling a short reference from a default
fn bench_merge(c: &mut Criterion) {
    let short = ModelPath::parse("mistral");
    let defaults = ModelPath::parse("registry.example.com/library/_:latest+Q4_0");

    c.bench_function("merge", |b| {
        b.iter(|| merge(black_box(&short), black_box(&defaults)));
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_merge);
criterion_main!(benches);
