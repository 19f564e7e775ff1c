//! Criterion micro-benchmarks for integral set operations.

use std::hint::black_box;

use cosy_bench::random_set;
use cosy_core::IntegralSet;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

/// Benchmark: insert 10K scattered values one at a time.
fn bench_insert_10k(c: &mut Criterion) {
    let values: Vec<u64> = random_set(1, 10_000, 1_000_000).iter().step_by(3).collect();
    c.bench_function("set_insert_10k", |b| {
        b.iter(|| {
            let mut s = IntegralSet::new();
            for &v in &values {
                s.insert(v);
            }
            black_box(s.segment_count())
        });
    });
}

/// Benchmark: unite and intersect two 1K-segment sets.
fn bench_unite_intersect_1k(c: &mut Criterion) {
    let a = random_set(2, 1_000, 100_000);
    let b = random_set(3, 1_000, 100_000);
    c.bench_function("set_unite_1k", |bch| {
        bch.iter(|| black_box(a.unite(&b)));
    });
    c.bench_function("set_intersect_1k", |bch| {
        bch.iter(|| black_box(a.intersect(&b)));
    });
}

/// Benchmark: merge a sparse set into a dense one in place.
fn bench_merge_sparse_into_dense(c: &mut Criterion) {
    let dense = random_set(4, 5_000, 100_000);
    let sparse = random_set(5, 50, 100_000);
    c.bench_function("set_merge_sparse_into_dense", |b| {
        b.iter_batched(
            || dense.clone(),
            |mut d| {
                d.merge(&sparse);
                black_box(d)
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: positional take from the middle of a fragmented set.
fn bench_take_middle(c: &mut Criterion) {
    let s = random_set(6, 5_000, 1_000_000);
    let from = s.size() / 2;
    c.bench_function("set_take_middle_100", |b| {
        b.iter_batched(
            || s.clone(),
            |mut s| black_box(s.take(from, 100)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_insert_10k,
    bench_unite_intersect_1k,
    bench_merge_sparse_into_dense,
    bench_take_middle
);
criterion_main!(benches);
