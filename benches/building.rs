//! Criterion benchmarks for address assembly.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use uri_builder::{escape_query_key, join_path, Scheme, UriBuilder};

fn full_builder() -> UriBuilder {
    let mut builder = UriBuilder::new();
    builder
        .scheme(Scheme::Https)
        .host("qudini.com")
        .expect("valid host")
        .user("qudini")
        .expect("valid user")
        .port(8080)
        .path(["api", "queues", "add"])
        .expect("valid path")
        .param("queu&#eId", 1)
        .expect("new key")
        .param("activate", true)
        .expect("new key")
        .fragment("section-2");
    builder
}

/// Benchmark: serialization of prepared builders
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    let mut minimal = UriBuilder::new();
    minimal.host("a.co").expect("valid host");

    let mut many_params = full_builder();
    for i in 0..32 {
        many_params.param(format!("key[{i}]"), i).expect("new key");
    }

    let cases = [
        ("minimal", minimal),
        ("full", full_builder()),
        ("many_params", many_params),
    ];

    for (name, builder) in &cases {
        group.bench_with_input(BenchmarkId::new("builder", name), builder, |b, builder| {
            b.iter(|| black_box(builder).build());
        });
    }

    group.finish();
}

/// Benchmark: building from scratch, including validation
fn bench_construct(c: &mut Criterion) {
    c.bench_function("construct_and_build", |b| {
        b.iter(|| full_builder().build());
    });
}

/// Benchmark: query-key escaping
fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_query_key");

    let cases = [
        ("clean", "activate_queue_now"),
        ("mixed", "queu&#eId[0]=x"),
        ("all_reserved", "!#$&'()*+,/:;=?@[]"),
    ];

    for (name, key) in cases {
        group.throughput(Throughput::Bytes(key.len() as u64));
        group.bench_with_input(BenchmarkId::new("key", name), &key, |b, key| {
            b.iter(|| escape_query_key(black_box(key)));
        });
    }

    group.finish();
}

/// Benchmark: standalone path joining
fn bench_join_path(c: &mut Criterion) {
    let segments: Vec<String> = (0..16).map(|i| format!("segment-{i}")).collect();
    c.bench_function("join_path_16", |b| {
        b.iter(|| join_path(black_box(&segments)));
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_construct,
    bench_escape,
    bench_join_path,
);
criterion_main!(benches);
