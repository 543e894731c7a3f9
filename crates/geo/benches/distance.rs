//! Benchmarks for geo crate distance and extraction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tripcalc_geo::{extract_coordinate, haversine_distance, Coordinate};

fn bench_single_distance(c: &mut Criterion) {
    let origin = Coordinate::new(-24.7821, -65.4232);
    let destination = Coordinate::new(-24.1858, -65.2995);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&origin), black_box(&destination)))
    });
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    group.bench_function("period_pair", |b| {
        b.iter(|| extract_coordinate(black_box("-24.7821, -65.4232")))
    });

    group.bench_function("labelled_comma_pair", |b| {
        b.iter(|| extract_coordinate(black_box("lat -24,7821 lon -65,4232")))
    });

    group.bench_function("no_coordinate", |b| {
        b.iter(|| extract_coordinate(black_box("Terminal de Omnibus, Salta")))
    });

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_extraction);
criterion_main!(benches);
