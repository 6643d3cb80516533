//! Benchmarks for diagram token encoding.

#![allow(clippy::format_push_string)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use puml_encode::{deflate_raw, encode64, encode_diagram};

/// Generate diagram source with the given number of interactions.
fn generate_diagram(arrows: usize) -> Vec<u8> {
    let mut src = String::with_capacity(arrows * 28 + 24);
    src.push_str("@startuml\n");
    for i in 0..arrows {
        src.push_str(&format!("Alice -> Bob : message {i}\n"));
    }
    src.push_str("@enduml\n");
    src.into_bytes()
}

fn bench_encode64(c: &mut Criterion) {
    let compressed = deflate_raw(&generate_diagram(100)).unwrap();

    let mut group = c.benchmark_group("encode64");
    group.throughput(Throughput::Bytes(compressed.len() as u64));
    group.bench_function("compressed_100_arrows", |b| {
        b.iter(|| encode64(&compressed));
    });
    group.finish();
}

fn bench_encode_diagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_diagram");
    for arrows in [10_usize, 100, 1000] {
        let source = generate_diagram(arrows);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(arrows), &source, |b, src| {
            b.iter(|| encode_diagram(src));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode64, bench_encode_diagram);
criterion_main!(benches);
