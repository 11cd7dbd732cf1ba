//! Raw parameter normalization example for spotfinder-rs
//!
//! Search parameters usually arrive as strings from a query string or a
//! form. Blank or unparsable values never fail the search: the affected
//! filter is dropped, and an out-of-range radius is clamped into 1..=50 km.
//! Run with `RUST_LOG=warn` to see what normalization discarded.

use spotfinder_core::prelude::*;

fn params(lat: &str, lng: &str, radius_km: &str) -> RawSearchParams {
    RawSearchParams {
        tags: Some(" , outdoor ,".into()),
        lat: Some(lat.into()),
        lng: Some(lng.into()),
        radius_km: Some(radius_km.into()),
        ..Default::default()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = Catalog::from_entries(vec![
        CatalogEntry::new(1, "A", 35.4681, 133.0486).with_tags("outdoor"),
        CatalogEntry::new(2, "B", 35.4690, 133.0490).with_tags("indoor"),
        CatalogEntry::new(3, "C", 40.0, 140.0).with_tags("outdoor"),
    ])?;
    let engine = SearchEngine::default();

    let cases = [
        ("well formed", params("35.4681", "133.0486", "1")),
        ("radius too small", params("35.4681", "133.0486", "0")),
        ("radius too large", params("35.4681", "133.0486", "1000")),
        ("radius not a number", params("35.4681", "133.0486", "far")),
        ("longitude missing", params("35.4681", "", "1")),
        ("latitude garbage", params("north", "133.0486", "1")),
    ];

    for (label, raw) in cases {
        let criteria = normalize(&raw);
        let ids: Vec<u64> = catalog.search(&engine, &criteria).iter().map(|e| e.id).collect();
        match criteria.location {
            Some(loc) => println!("{label:<20} radius {:>4} km -> {ids:?}", loc.radius_km),
            None => println!("{label:<20} no location    -> {ids:?}"),
        }
    }

    Ok(())
}
