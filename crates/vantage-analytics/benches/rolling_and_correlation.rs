//! Benchmarks for rolling statistics and cross-series matrices.
//!
//! Run with: cargo bench -p vantage-analytics --features parallel

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vantage_analytics::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Deterministic pseudo-random daily returns in roughly +/-2%.
fn create_returns(len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            (unit - 0.5) * 0.04
        })
        .collect()
}

fn create_universe(count: usize, len: usize) -> Vec<Vec<f64>> {
    (0..count).map(|k| create_returns(len, k as u64 + 1)).collect()
}

// =============================================================================
// SINGLE SERIES BENCHMARKS
// =============================================================================

fn bench_summary_metrics(c: &mut Criterion) {
    let returns = create_returns(2520, 42);
    let rf = RiskFreeRate::Annual(0.03);

    c.bench_function("annualized_volatility_10y", |b| {
        b.iter(|| compute_annualized_volatility(black_box(&returns), 252.0))
    });
    c.bench_function("sharpe_ratio_10y", |b| {
        b.iter(|| compute_sharpe_ratio(black_box(&returns), &rf, 252.0))
    });
    c.bench_function("max_drawdown_10y", |b| {
        b.iter(|| compute_max_drawdown(black_box(&returns)))
    });
    c.bench_function("performance_summary_10y", |b| {
        let calc = PerformanceCalculator::default();
        b.iter(|| calc.summary(black_box(&returns), &rf))
    });
}

// =============================================================================
// ROLLING BENCHMARKS
// =============================================================================

fn bench_rolling_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_volatility");
    let window = Window::new(63).unwrap();

    for len in [252, 1260, 5040] {
        let returns = create_returns(len, 7);
        group.throughput(Throughput::Elements(window.count(len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &returns, |b, returns| {
            b.iter(|| {
                compute_rolling_volatility(black_box(returns), window, 252.0)
                    .map(|rolling| rolling.sum::<f64>())
            })
        });
    }

    group.finish();
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple_moving_average");
    let returns = create_returns(5040, 11);

    for size in [5, 21, 126] {
        let window = Window::new(size).unwrap();
        group.throughput(Throughput::Elements(window.count(returns.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &window, |b, &window| {
            b.iter(|| simple_moving_average(black_box(&returns), window).map(|sma| sma.sum::<f64>()))
        });
    }

    group.finish();
}

// =============================================================================
// CORRELATION BENCHMARKS
// =============================================================================

fn bench_correlation_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_matrix");
    group.sample_size(20);

    let sequential = AnalyticsConfig::sequential();
    let parallel = AnalyticsConfig::new();

    for count in [10, 50, 200] {
        let universe = create_universe(count, 252);
        let pairs = (count * (count - 1) / 2) as u64;
        group.throughput(Throughput::Elements(pairs));

        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &universe,
            |b, universe| {
                b.iter(|| compute_correlation_matrix_with(black_box(universe), &sequential))
            },
        );
        group.bench_with_input(BenchmarkId::new("parallel", count), &universe, |b, universe| {
            b.iter(|| compute_correlation_matrix_with(black_box(universe), &parallel))
        });
    }

    group.finish();
}

fn bench_covariance_and_variance(c: &mut Criterion) {
    let universe = create_universe(50, 252);
    let weights = vec![1.0 / 50.0; 50];

    c.bench_function("covariance_matrix_50", |b| {
        b.iter(|| compute_covariance_matrix(black_box(&universe)))
    });

    if let Ok(cov) = compute_covariance_matrix(&universe) {
        c.bench_function("portfolio_variance_50", |b| {
            b.iter(|| compute_portfolio_variance(black_box(&weights), &cov))
        });
    }
}

criterion_group!(single_series, bench_summary_metrics,);

criterion_group!(rolling, bench_rolling_volatility, bench_moving_average,);

criterion_group!(
    cross_series,
    bench_correlation_matrix,
    bench_covariance_and_variance,
);

criterion_main!(single_series, rolling, cross_series);
