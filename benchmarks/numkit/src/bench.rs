//! numkit benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - 1-D reduction scalability (1K to 1M elements)
//! - 2-D reduction under both storage layouts
//! - Accumulation methods (sequential vs. compensated)
//! - Binomial coefficient evaluation
//!
//! For the sequential path, use `NUMKIT_MODE=sequential cargo bench`.
//! For the chunked parallel path, use `NUMKIT_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use numkit::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn parallel_enabled() -> bool {
    matches!(env::var("NUMKIT_MODE").ok().as_deref(), Some("parallel"))
}

fn mode_label() -> &'static str {
    if parallel_enabled() { "parallel" } else { "sequential" }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate normally distributed values around a baseline.
fn generate_values(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(100.0, 15.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate ill-conditioned values: one huge term followed by tiny ones.
fn generate_ill_conditioned(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(1e-8, 1e-9).unwrap();
    let mut values: Vec<f64> = (0..size).map(|_| dist.sample(&mut rng)).collect();
    values[0] = 1e10;
    values
}

// ============================================================================
// 1-D Reduction Benchmarks
// ============================================================================

fn bench_sum1d_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum1d_scalability");
    let reducer = Numkit::new()
        .parallel(parallel_enabled())
        .adapter(Reduce)
        .build()
        .unwrap();

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let values = generate_values(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new(mode_label(), size),
            &values,
            |b, values| b.iter(|| reducer.sum1d(black_box(values))),
        );
    }
    group.finish();
}

fn bench_accumulation_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulation_methods");
    let size = 100_000;
    let values = generate_ill_conditioned(size, 7);
    group.throughput(Throughput::Elements(size as u64));

    for (label, method) in [("sequential", Sequential), ("compensated", Compensated)] {
        let reducer = Numkit::new()
            .accumulation(method)
            .adapter(Reduce)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new(label, size), &values, |b, values| {
            b.iter(|| reducer.sum1d(black_box(values)))
        });
    }
    group.finish();
}

// ============================================================================
// 2-D Reduction Benchmarks
// ============================================================================

fn bench_sum2d_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum2d_layouts");

    for (rows, cols) in [(100, 100), (1_000, 1_000)] {
        let values = generate_values(rows * cols, 1234);
        group.throughput(Throughput::Elements((rows * cols) as u64));

        for (label, layout) in [("column_major", ColumnMajor), ("row_major", RowMajor)] {
            let reducer = Numkit::new()
                .layout(layout)
                .parallel(parallel_enabled())
                .adapter(Reduce)
                .build()
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(label, format!("{rows}x{cols}")),
                &values,
                |b, values| b.iter(|| reducer.sum2d(black_box(values), rows, cols).unwrap()),
            );
        }
    }
    group.finish();
}

// ============================================================================
// Binomial Benchmarks
// ============================================================================

fn bench_binomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial");
    let binom = Numkit::new().adapter(Binomial).build().unwrap();

    let pairs: Vec<(f64, f64)> = vec![(10.0, 4.0), (100.0, 37.0), (1000.0, 500.0)];
    for (n, k) in pairs {
        group.bench_with_input(
            BenchmarkId::new("coefficient", format!("C({n},{k})")),
            &(n, k),
            |b, &(n, k)| b.iter(|| binom.coefficient(black_box(n), black_box(k)).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("ln_coefficient", format!("C({n},{k})")),
            &(n, k),
            |b, &(n, k)| b.iter(|| binom.ln_coefficient(black_box(n), black_box(k)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sum1d_scalability,
    bench_accumulation_methods,
    bench_sum2d_layouts,
    bench_binomial
);
criterion_main!(benches);
