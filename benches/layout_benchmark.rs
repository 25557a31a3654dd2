#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the grouped bar layout engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use barviz::layout::{y_upper_limit, GroupedLayout};

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouped_layout");

    for (categories, series) in [(4, 3), (50, 5), (500, 8)] {
        let layout = GroupedLayout::new(0.1, 0.02);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{categories}x{series}")),
            &(categories, series),
            |b, &(n, m)| {
                b.iter(|| layout.positions(black_box(n), black_box(m)));
            },
        );
    }

    group.finish();
}

fn y_limit_benchmark(c: &mut Criterion) {
    let values: Vec<f32> = (0..10_000).map(|i| (i % 317) as f32).collect();

    c.bench_function("y_upper_limit_10k", |b| {
        b.iter(|| y_upper_limit(black_box(&values)));
    });
}

criterion_group!(benches, layout_benchmark, y_limit_benchmark);
criterion_main!(benches);
