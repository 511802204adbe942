//! Ordered search benchmark.
//!
//! Compares the multi-target driver (window narrows after each hit) against
//! independent full-range searches for the same ascending targets, with the
//! standard library's `binary_search` as a baseline.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use utilkit::search::{binary_search, search_many};

const SIZES: [i64; 4] = [100, 1000, 10000, 100_000];

/// Sorted sequence of even numbers, so odd targets miss.
fn generate_sequence(size: i64) -> Vec<i64> {
    (0..size).map(|value| value * 2).collect()
}

/// Every seventh value in range, alternating hits and misses.
fn generate_targets(size: i64) -> Vec<i64> {
    (0..size * 2).step_by(7).collect()
}

fn benchmark_single_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_search_single");

    for size in SIZES {
        let sequence = generate_sequence(size);
        let target = size;
        group.bench_with_input(BenchmarkId::new("binary_search", size), &size, |bencher, _| {
            bencher.iter(|| black_box(binary_search(black_box(&sequence), black_box(&target))));
        });
        group.bench_with_input(BenchmarkId::new("std", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&sequence).binary_search(black_box(&target))));
        });
    }

    group.finish();
}

fn benchmark_multi_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_search_many");

    for size in SIZES {
        let sequence = generate_sequence(size);
        let targets = generate_targets(size);
        group.bench_with_input(BenchmarkId::new("narrowing", size), &size, |bencher, _| {
            bencher.iter(|| black_box(search_many(&sequence, targets.iter().copied())));
        });
        group.bench_with_input(BenchmarkId::new("independent", size), &size, |bencher, _| {
            bencher.iter(|| {
                let reports: Vec<_> = targets
                    .iter()
                    .map(|target| binary_search(&sequence, target))
                    .collect();
                black_box(reports)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_search, benchmark_multi_search);
criterion_main!(benches);
