use criterion::{black_box, criterion_group, criterion_main, Criterion};
use natal_core::aspects::{AspectCalculator, AspectEndpoint, AspectSettings, OrbScaling};
use natal_core::positions::{Body, PositionSet, ALL_BODIES};

fn bench_calculate_aspect(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let settings = AspectSettings {
        scaling: OrbScaling::luminaries(1.25).expect("valid factor"),
        ..AspectSettings::default()
    };
    let sun = AspectEndpoint::new(Body::Sun, 100.0, false);
    let moon = AspectEndpoint::new(Body::Moon, 102.0, false);

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| calculator.calculate_aspect(black_box(sun), black_box(moon), black_box(&settings)))
    });
}

fn bench_compute_body_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let mut positions = PositionSet::new();
    for (i, body) in ALL_BODIES.iter().enumerate() {
        positions
            .insert(*body, (i as f64) * 27.5, false)
            .expect("valid longitude");
    }
    let settings = AspectSettings::default();

    c.bench_function("compute_body_aspects", |b| {
        b.iter(|| calculator.compute_body_aspects(black_box(&positions), black_box(&settings)))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_compute_body_aspects);
criterion_main!(benches);
