use criterion::{black_box, criterion_group, criterion_main, Criterion};
use natal_core::aspects::{AspectCalculator, AspectSettings};
use natal_core::patterns::PatternDetector;
use natal_core::positions::PositionSet;

fn bench_detect_patterns(c: &mut Criterion) {
    // Grand trine with a kite tail, a grand cross and a tight stellium
    let positions = PositionSet::from_named([
        ("sun", 0.0, false),
        ("moon", 120.0, false),
        ("mercury", 5.0, false),
        ("venus", 240.0, false),
        ("mars", 180.0, false),
        ("jupiter", 90.0, false),
        ("saturn", 270.0, false),
        ("uranus", 12.0, false),
        ("neptune", 210.0, false),
        ("pluto", 150.0, false),
    ])
    .expect("valid positions");
    let aspects = AspectCalculator::new().compute_body_aspects(&positions, &AspectSettings::default());
    let detector = PatternDetector::default();

    c.bench_function("detect_patterns", |b| {
        b.iter(|| detector.detect(black_box(&aspects), black_box(&positions)))
    });
}

criterion_group!(benches, bench_detect_patterns);
criterion_main!(benches);
