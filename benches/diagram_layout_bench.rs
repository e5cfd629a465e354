use criterion::{criterion_group, criterion_main, Criterion};
use klima_rs::core::{precipitation_labels, Elevation, Entry};
use klima_rs::io::sample_dataset;
use klima_rs::layout::compute_layout;
use std::hint::black_box;

fn bench_compute_layout_sample(c: &mut Criterion) {
    let entry = sample_dataset().remove(0);

    c.bench_function("compute_layout_sample", |b| {
        b.iter(|| {
            let _ = compute_layout(black_box(&entry));
        })
    });
}

fn bench_compute_layout_monsoon(c: &mut Criterion) {
    // Extreme wet-season record exercising the long compressed label range.
    let entry = Entry {
        name: "Monsun".to_owned(),
        station: "Cherrapunji".to_owned(),
        country: "Indien".to_owned(),
        elevation: Elevation::Meters(1313),
        location: "25°N/91°E".to_owned(),
        temperatures: [
            11.5, 13.2, 17.0, 19.5, 20.1, 20.4, 20.3, 20.6, 20.4, 19.0, 15.5, 12.4,
        ],
        precipitation: [
            11.0, 29.0, 199.0, 693.0, 1243.0, 2526.0, 2418.0, 1605.0, 1130.0, 448.0, 42.0, 10.0,
        ],
    };

    c.bench_function("compute_layout_monsoon", |b| {
        b.iter(|| {
            let _ = compute_layout(black_box(&entry));
        })
    });
}

fn bench_precipitation_labels(c: &mut Criterion) {
    let entry = sample_dataset().remove(0);

    c.bench_function("precipitation_labels_sample", |b| {
        b.iter(|| {
            let _ = precipitation_labels(
                black_box(&entry.temperatures),
                black_box(&entry.precipitation),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_compute_layout_sample,
    bench_compute_layout_monsoon,
    bench_precipitation_labels
);
criterion_main!(benches);
