//! Benchmark for the sequential hash chain

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timelock_core::hash_chain;

fn bench_chain(c: &mut Criterion) {
    let seed = [0u8; 32];

    c.bench_function("chain_1k", |b| {
        b.iter(|| hash_chain(black_box(&seed), black_box(1_000)))
    });

    c.bench_function("chain_100k", |b| {
        b.iter(|| hash_chain(black_box(&seed), black_box(100_000)))
    });
}

criterion_group!(benches, bench_chain);
criterion_main!(benches);
