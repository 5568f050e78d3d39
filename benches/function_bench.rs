//! Benchmark for the once and memoize wrappers.
//!
//! Compares the cached path against calling the wrapped function directly.

use collars::function::{memoize, once};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sum_to(limit: u64) -> u64 {
    (0..limit).sum()
}

// =============================================================================
// once Benchmarks
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("first_call", |bencher| {
        bencher.iter(|| {
            let wrapper = once(|| sum_to(black_box(100)));
            black_box(wrapper.call())
        });
    });

    group.bench_function("cached_call", |bencher| {
        let wrapper = once(|| sum_to(100));
        wrapper.call();
        bencher.iter(|| black_box(wrapper.call()));
    });

    group.finish();
}

// =============================================================================
// memoize Benchmarks
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for limit in [10_u64, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("direct", limit), &limit, |bencher, &limit| {
            bencher.iter(|| sum_to(black_box(limit)));
        });

        group.bench_with_input(BenchmarkId::new("cache_hit", limit), &limit, |bencher, &limit| {
            let memoized = memoize(sum_to);
            memoized.call(limit);
            bencher.iter(|| memoized.call(black_box(limit)));
        });
    }

    group.bench_function("tuple_key", |bencher| {
        let memoized = memoize(|(left, right): (u64, u64)| left * right);
        bencher.iter(|| memoized.call(black_box((6, 7))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_once, benchmark_memoize);
criterion_main!(benches);
