//! Catalog loading from JSON sources and the binary cache.
#![cfg(all(feature = "json", feature = "builder"))]

use spotfinder_core::loader::CompressionMode;
use spotfinder_core::prelude::*;
use std::fs;

const SOURCE: &str = r#"{
  "entries": [
    { "id": 1, "name": "Kaike Onsen", "lat": 35.45, "lng": 133.37, "tags": "outdoor,family",
      "description": "Seaside spa town" },
    { "id": 2, "name": "Station Bath", "lat": "35.4681", "lng": "133.0486", "tags": ["indoor"] },
    { "id": 3, "name": "Tamatsukuri Onsen", "latitude": 35.4231, "longitude": 133.01 }
  ]
}"#;

#[test]
fn json_source_round_trips_through_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("spots.json");
    fs::write(&source, SOURCE).unwrap();

    let first = Catalog::load_cached(&source).unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first.get(2).unwrap().tags, "indoor");

    let cache = Catalog::cache_path_for(&source).unwrap();
    assert!(cache.exists(), "cache should be written next to the source");

    let second = Catalog::load_cached(&source).unwrap();
    assert_eq!(second.entries(), first.entries());

    let from_cache = Catalog::load_binary(&cache).unwrap();
    assert_eq!(from_cache.entries(), first.entries());
}

#[test]
fn corrupt_cache_is_rebuilt() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("spots.json");
    fs::write(&source, SOURCE).unwrap();
    let cache = Catalog::cache_path_for(&source).unwrap();
    Catalog::load_cached(&source).unwrap();

    fs::write(&cache, b"definitely not bincode").unwrap();
    let catalog = Catalog::load_cached(&source).unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(Catalog::load_binary(&cache).is_ok());
}

#[test]
fn uncompressed_binary_loads_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spots.bin");
    let catalog = Catalog::from_json_slice(SOURCE.as_bytes()).unwrap();
    catalog.save_binary_with(&path, CompressionMode::None).unwrap();

    let loaded = Catalog::load_from_path(&path).unwrap();
    assert_eq!(loaded.entries(), catalog.entries());
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_json_is_detected_by_content() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spots.json.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(SOURCE.as_bytes()).unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let catalog = Catalog::load_from_path(&path).unwrap();
    assert_eq!(catalog.len(), 3);
    let hits = catalog.search(&SearchEngine::default(), &SearchCriteria::new().text("onsen"));
    assert_eq!(hits.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn invalid_entries_are_rejected() {
    let bad = r#"[ { "id": 1, "name": "X", "lat": 123.0, "lng": 0 } ]"#;
    assert!(matches!(
        Catalog::from_json_slice(bad.as_bytes()),
        Err(SpotError::InvalidData(_))
    ));

    let dup = r#"[ { "id": 1, "name": "X", "lat": 1, "lng": 0 }, { "id": 1, "name": "Y", "lat": 2, "lng": 0 } ]"#;
    assert!(matches!(
        Catalog::from_json_slice(dup.as_bytes()),
        Err(SpotError::InvalidData(_))
    ));
}

#[test]
fn missing_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load_cached(dir.path().join("nope.json"));
    assert!(matches!(err, Err(SpotError::NotFound(_))));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, r#"{ "max_radius_km": 20.0, "text_folding": "transliterate" }"#).unwrap();

    let config = SearchConfig::from_json_path(&path).unwrap();
    assert_eq!(config.max_radius_km, 20.0);
    assert_eq!(config.text_folding, TextFolding::Transliterate);

    fs::write(&path, r#"{ "min_radius_km": 30.0, "max_radius_km": 20.0 }"#).unwrap();
    assert!(matches!(SearchConfig::from_json_path(&path), Err(SpotError::Config(_))));
}
