//! Criterion benchmarks for the impact-lattice Asian pricers.
//!
//! Enumeration cost doubles with each step, so the step counts are chosen
//! to show the `2^n` scaling without running for minutes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::instruments::AsianLatticeParams;
use pricer_pricing::{ArithmeticBoundsEstimator, GeometricAsianPricer};

fn params(n_steps: usize) -> AsianLatticeParams {
    AsianLatticeParams::builder()
        .spot(100.0)
        .strike(100.0)
        .rate(1.02)
        .up(1.1)
        .down(0.9)
        .impact(0.05)
        .volumes(1.0, 1.0)
        .n_steps(n_steps)
        .build()
        .unwrap()
}

/// Benchmark the exact geometric Asian price.
fn bench_geometric(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometric_asian");
    let pricer = GeometricAsianPricer::default();

    for n_steps in [8, 12, 16] {
        let p = params(n_steps);
        group.bench_with_input(BenchmarkId::new("price", n_steps), &p, |b, p| {
            b.iter(|| pricer.price(black_box(p)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the arithmetic bound estimation.
fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic_bounds");
    let estimator = ArithmeticBoundsEstimator::default();

    for n_steps in [8, 12, 16] {
        let p = params(n_steps);
        group.bench_with_input(BenchmarkId::new("estimate", n_steps), &p, |b, p| {
            b.iter(|| estimator.estimate(black_box(p)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometric, bench_bounds);
criterion_main!(benches);
