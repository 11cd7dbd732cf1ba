//! End-to-end searches through the public API: raw parameters in,
//! ordered entries out.

use spotfinder_core::prelude::*;
use spotfinder_core::{matches_tags, TagFilter};

fn scenario_catalog() -> Catalog {
    Catalog::from_entries(vec![
        CatalogEntry::new(1, "A", 35.4681, 133.0486).with_tags("outdoor"),
        CatalogEntry::new(2, "B", 35.4690, 133.0490).with_tags("indoor"),
        CatalogEntry::new(3, "C", 40.0, 140.0).with_tags("outdoor"),
    ])
    .unwrap()
}

fn raw(q: Option<&str>, tags: Option<&str>, loc: Option<(&str, &str, &str)>) -> RawSearchParams {
    RawSearchParams {
        q: q.map(Into::into),
        tags: tags.map(Into::into),
        lat: loc.map(|l| l.0.into()),
        lng: loc.map(|l| l.1.into()),
        radius_km: loc.map(|l| l.2.into()),
    }
}

fn ids(hits: &[&CatalogEntry]) -> Vec<u64> {
    hits.iter().map(|e| e.id).collect()
}

#[test]
fn tag_and_radius_leave_only_the_nearby_outdoor_spot() {
    let catalog = scenario_catalog();
    let criteria = normalize(&raw(None, Some("outdoor"), Some(("35.4681", "133.0486", "1"))));
    let (hits, report) = catalog.search_with_report(&SearchEngine::default(), &criteria);

    assert_eq!(ids(&hits), vec![1]);
    // B is dropped by the tag stage, C by the location stages.
    assert_eq!(report.count_after(Stage::TagFiltered), Some(2));
    assert_eq!(report.count_after(Stage::BoxFiltered), Some(1));
    assert_eq!(report.count_after(Stage::DistanceFiltered), Some(1));
}

#[test]
fn empty_criteria_return_the_catalog_unchanged() {
    let catalog = scenario_catalog();
    let hits = catalog.search(&SearchEngine::default(), &normalize(&RawSearchParams::default()));
    assert_eq!(hits.len(), catalog.len());
    assert!(hits.iter().zip(catalog.entries()).all(|(h, e)| std::ptr::eq(*h, e)));
}

#[test]
fn radius_clamps_are_indistinguishable() {
    let catalog = scenario_catalog();
    let engine = SearchEngine::default();
    let run = |r: &str| {
        ids(&catalog.search(&engine, &normalize(&raw(None, None, Some(("35.4681", "133.0486", r))))))
    };
    assert_eq!(run("0"), run("1"));
    assert_eq!(run("1000"), run("50"));
    assert_eq!(run("0"), vec![1, 2]);
}

#[test]
fn partial_location_is_ignored_not_fatal() {
    let catalog = scenario_catalog();
    let mut params = raw(None, Some("outdoor"), Some(("35.4681", "", "1")));
    assert_eq!(ids(&catalog.search(&SearchEngine::default(), &normalize(&params))), vec![1, 3]);

    params.lng = Some("east".into());
    assert_eq!(ids(&catalog.search(&SearchEngine::default(), &normalize(&params))), vec![1, 3]);
}

#[test]
fn tag_terms_are_or_ed() {
    let onsen = CatalogEntry::new(10, "Onsen", 35.0, 133.0).with_tags("露天風呂,家族風呂");
    assert!(!matches_tags(&onsen, Some("rotenburo, family")));
    assert!(matches_tags(&onsen, Some("rotenburo, 家族風呂")));
    assert!(matches_tags(&onsen, Some("露天風呂, family")));
    assert_eq!(TagFilter::parse("rotenburo, family").unwrap().terms().len(), 2);
}

#[test]
fn text_query_spans_name_and_description() {
    let catalog = Catalog::from_entries(vec![
        CatalogEntry::new(1, "Kaike Onsen", 35.45, 133.37).with_description("Seaside resort"),
        CatalogEntry::new(2, "Seaside Cafe", 35.46, 133.36),
        CatalogEntry::new(3, "Mountain Hut", 35.37, 133.54),
    ])
    .unwrap();
    let hits = catalog.search(&SearchEngine::default(), &normalize(&raw(Some(" SEASIDE "), None, None)));
    assert_eq!(ids(&hits), vec![1, 2]);
}

#[test]
fn results_are_a_subsequence_of_the_input() {
    let entries: Vec<CatalogEntry> = (0..200)
        .map(|i| {
            let f = i as f64;
            CatalogEntry::new(i, format!("spot {i}"), 35.0 + (f * 0.37).sin() * 0.5, 133.0 + (f * 0.71).cos() * 0.5)
                .with_tags(if i % 3 == 0 { "outdoor" } else { "indoor" })
        })
        .collect();
    let catalog = Catalog::from_entries(entries).unwrap();
    let criteria = normalize(&raw(None, Some("outdoor"), Some(("35.0", "133.0", "30"))));
    let hits = catalog.search(&SearchEngine::default(), &criteria);

    assert!(!hits.is_empty());
    assert!(hits.windows(2).all(|w| w[0].id < w[1].id));
    for h in &hits {
        assert_eq!(h.id % 3, 0);
        assert!(distance_km(35.0, 133.0, h.latitude, h.longitude) <= 30.0);
    }
    // Nothing within the radius was lost by the box stage.
    let expected = catalog
        .iter()
        .filter(|e| e.id % 3 == 0 && distance_km(35.0, 133.0, e.latitude, e.longitude) <= 30.0)
        .count();
    assert_eq!(hits.len(), expected);
}

#[test]
fn engine_is_shareable_across_threads() {
    let catalog = std::sync::Arc::new(scenario_catalog());
    let engine = SearchEngine::default();
    let handles: Vec<_> = ["outdoor", "indoor"]
        .into_iter()
        .map(|tag| {
            let catalog = std::sync::Arc::clone(&catalog);
            std::thread::spawn(move || {
                let criteria = SearchCriteria::new().tags(tag);
                catalog.search(&engine, &criteria).len()
            })
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![2, 1]);
}
