use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal_macros::dec;

use dipmax::estimator::RepMaxEstimator;
use dipmax::models::{DipSet, Unit};
use dipmax::report::DipReport;

/// Benchmarks for the estimation pipeline
///
/// The engine is O(1) per submission; these exist to catch regressions
/// in the decimal arithmetic paths.

fn bench_one_rep_max(c: &mut Criterion) {
    let set = DipSet {
        bodyweight_kg: dec!(70),
        extra_weight_kg: dec!(25),
        reps: 6,
    };

    c.bench_function("one_rep_max", |b| {
        b.iter(|| RepMaxEstimator::one_rep_max(black_box(&set)));
    });
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("Report Generation");

    for unit in [Unit::Kg, Unit::Lb] {
        let set = DipSet::from_input(dec!(154), dec!(55), 6, unit);

        group.bench_with_input(
            BenchmarkId::new("generate", unit.to_string()),
            &set,
            |b, set| {
                b.iter(|| DipReport::generate(black_box(set), unit));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_one_rep_max, bench_full_report);
criterion_main!(benches);
