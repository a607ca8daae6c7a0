//! Benchmark for SuperList chains vs plain iterator pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use super_iterables::SuperList;

// =============================================================================
// map/filter chain Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1000, 10000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("SuperList", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let list = SuperList::from(values.clone());
                    black_box(list.map(|x| x * 3).filter(|x| x % 2 == 0))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Vec", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let result: Vec<i64> = values
                        .clone()
                        .into_iter()
                        .map(|x| x * 3)
                        .filter(|x| x % 2 == 0)
                        .collect();
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// sort_by Benchmark
// =============================================================================

fn benchmark_sort_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_by");

    for size in [100, 1000, 10000] {
        let values: Vec<i64> = (0..size).map(|x| (x * 7919) % 1013).collect();

        group.bench_with_input(
            BenchmarkId::new("SuperList", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let list = SuperList::from(values.clone());
                    black_box(list.sort_by(|x| -x, false))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Vec", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut result = values.clone();
                    result.sort_by_key(|x| -x);
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// group_by / bucket_by Benchmark
// =============================================================================

fn benchmark_grouping(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("grouping");

    for size in [100, 1000, 10000] {
        let values: Vec<i64> = (0..size).map(|x| x / 10).collect();

        group.bench_with_input(
            BenchmarkId::new("group_by", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(SuperList::from(values.clone()).group_by(|x| *x)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("bucket_by", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(SuperList::from(values.clone()).bucket_by(|x| x % 7)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_filter,
    benchmark_sort_by,
    benchmark_grouping
);
criterion_main!(benches);
