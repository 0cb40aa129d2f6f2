//! Benchmarks for bond pricing and yield solving.
//!
//! Run with: cargo bench -p accrue-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use accrue_bonds::prelude::*;
use accrue_core::accumulation::ALL_CONVENTIONS;
use accrue_core::config::{IrrConfig, RootMethod};
use accrue_core::Stream;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_test_bond(years: u32) -> Bond {
    make_bond(0.045, 2, years, 0, DEFAULT_PAR).unwrap_or_else(|err| panic!("bad bond: {err}"))
}

fn create_test_stream(periods: usize) -> Stream {
    let mut stream = Stream::new();
    stream.add(-1000.0, 0.0);
    for k in 1..=periods {
        stream.add(35.0 + (k % 7) as f64, k as f64 * 0.25);
    }
    stream.add(1000.0, periods as f64 * 0.25);
    stream
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("bond_price");

    for years in [2, 10, 30] {
        let bond = create_test_bond(years);
        group.throughput(Throughput::Elements(u64::from(years) * 2 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(years), &bond, |b, bond| {
            b.iter(|| bond.price(black_box(0.05)));
        });
    }

    group.finish();
}

fn bench_ytm(c: &mut Criterion) {
    let mut group = c.benchmark_group("bond_ytm");

    for years in [2, 10, 30] {
        let bond = create_test_bond(years);
        for method in [RootMethod::Newton, RootMethod::Secant] {
            let config = IrrConfig::default()
                .with_compounding(bond.default_compounding())
                .with_method(method);
            group.bench_with_input(
                BenchmarkId::new(method.to_string(), years),
                &bond,
                |b, bond| {
                    b.iter(|| bond.ytm_with_config(black_box(97.5), &config));
                },
            );
        }
    }

    group.finish();
}

fn bench_stream_irr(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_irr");
    let stream = create_test_stream(40);

    for compounding in ALL_CONVENTIONS {
        group.bench_with_input(
            BenchmarkId::from_parameter(compounding),
            &stream,
            |b, stream| {
                b.iter(|| black_box(stream).irr(compounding));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_price, bench_ytm, bench_stream_irr);
criterion_main!(benches);
