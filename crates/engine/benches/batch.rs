//! Benchmarks for batch row processing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tripcalc_engine::{run_batch, Fleet, FuelPrices, InputRow};

fn create_rows(count: usize) -> Vec<InputRow> {
    (0..count)
        .map(|i| {
            // Points spread around Salta, every tenth row unreadable
            let lat = -24.0 - (i as f64 * 0.01) % 2.0;
            let lon = -65.0 - (i as f64 * 0.013) % 2.0;
            let destination = if i % 10 == 9 {
                "sin coordenadas".to_string()
            } else {
                format!("{:.5}, {:.5}", lat, lon)
            };
            InputRow {
                origin: "-24.7821, -65.4232".into(),
                destination: destination.into(),
                round_trip: i % 2 == 0,
                is_motorcycle: i % 3 == 0,
                is_pickup: i % 5 == 0,
            }
        })
        .collect()
}

fn bench_batch(c: &mut Criterion) {
    let fleet = Fleet::standard();
    let prices = FuelPrices::new(1100.0, 1350.0);
    let mut group = c.benchmark_group("batch");

    for size in [10, 100, 1000].iter() {
        let rows = create_rows(*size);
        group.bench_with_input(BenchmarkId::new("run_batch", size), size, |b, _| {
            b.iter(|| run_batch(black_box(&rows), black_box(&prices), black_box(&fleet)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
