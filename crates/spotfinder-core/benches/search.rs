//! Search pipeline benchmarks.
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `location` | Box pre-filter + haversine vs. haversine on every entry |
//! | `pipeline` | Full text + tag + location search as the catalog grows |
//!
//! ```sh
//! cargo bench -p spotfinder-core --bench search
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spotfinder_core::prelude::*;
use std::hint::black_box;

const CENTER: Coordinate = Coordinate {
    lat: 35.4681,
    lng: 133.0486,
};

/// Deterministic catalog spread over roughly 10 x 10 degrees around `CENTER`.
fn synthetic_catalog(n: u64) -> Catalog {
    let entries = (0..n)
        .map(|i| {
            let f = i as f64;
            let lat = CENTER.lat + (f * 0.618_033).fract() * 10.0 - 5.0;
            let lng = CENTER.lng + (f * 0.414_213).fract() * 10.0 - 5.0;
            let tags = match i % 4 {
                0 => "outdoor,family",
                1 => "indoor",
                2 => "outdoor",
                _ => "",
            };
            CatalogEntry::new(i, format!("spot {i} onsen"), lat, lng).with_tags(tags)
        })
        .collect();
    Catalog::from_entries(entries).expect("synthetic catalog is valid")
}

fn location_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("location");
    let engine = SearchEngine::default();

    for n in [1_000u64, 10_000, 100_000] {
        let catalog = synthetic_catalog(n);
        group.throughput(Throughput::Elements(n));

        for radius in [1.0, 50.0] {
            let criteria = SearchCriteria::new().within(CENTER, radius, engine.config());

            group.bench_with_input(
                BenchmarkId::new(format!("two_phase_{radius}km"), n),
                &catalog,
                |b, catalog| b.iter(|| catalog.search(&engine, black_box(&criteria)).len()),
            );

            group.bench_with_input(
                BenchmarkId::new(format!("exact_only_{radius}km"), n),
                &catalog,
                |b, catalog| {
                    b.iter(|| {
                        catalog
                            .iter()
                            .filter(|e| CENTER.distance_km_to(&e.coordinate()) <= black_box(radius))
                            .count()
                    })
                },
            );
        }
    }

    group.finish();
}

fn pipeline_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let engine = SearchEngine::default();
    let criteria = normalize(&RawSearchParams {
        q: Some("onsen".into()),
        tags: Some("outdoor, family".into()),
        lat: Some(CENTER.lat.to_string()),
        lng: Some(CENTER.lng.to_string()),
        radius_km: Some("25".into()),
    });

    for n in [1_000u64, 10_000, 100_000] {
        let catalog = synthetic_catalog(n);
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, catalog| {
            b.iter(|| catalog.search(&engine, black_box(&criteria)).len())
        });
    }

    group.finish();
}

criterion_group!(benches, location_bench, pipeline_bench);
criterion_main!(benches);
