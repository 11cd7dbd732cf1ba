//! Basic usage example for spotfinder-rs
//!
//! This example demonstrates how to:
//! - Build a catalog in memory
//! - Run text, tag and radius searches
//! - Inspect the per-stage pipeline report

use spotfinder_core::prelude::*;

fn main() -> Result<()> {
    println!("=== spotfinder basic search ===\n");

    let catalog = Catalog::from_entries(vec![
        CatalogEntry::new(1, "Kaike Onsen", 35.4484, 133.3700)
            .with_description("Seaside hot spring resort")
            .with_tags("outdoor,family"),
        CatalogEntry::new(2, "Station Bath", 35.4681, 133.0486).with_tags("indoor"),
        CatalogEntry::new(3, "Tamatsukuri Onsen", 35.4231, 133.0100).with_tags("outdoor"),
        CatalogEntry::new(4, "Misasa Onsen", 35.4100, 133.8800).with_tags("outdoor,radium"),
    ])?;
    let engine = SearchEngine::default();

    println!("--- Text query \"onsen\" ---");
    for e in catalog.search(&engine, &SearchCriteria::new().text("onsen")) {
        println!("{:>3}  {}", e.id, e.name);
    }
    println!();

    println!("--- Outdoor spots within 10 km of Matsue station ---");
    let matsue = Coordinate::new(35.4641, 133.0631);
    let criteria = SearchCriteria::new()
        .tags("outdoor")
        .within(matsue, 10.0, engine.config());
    let (hits, report) = catalog.search_with_report(&engine, &criteria);
    for e in &hits {
        println!("{:>3}  {}  {:.2} km", e.id, e.name, matsue.distance_km_to(&e.coordinate()));
    }
    println!();

    println!("--- Pipeline ---");
    for s in &report.stages {
        println!("{:<9} {}{}", s.stage.as_str(), s.candidates, if s.skipped { " (skipped)" } else { "" });
    }

    Ok(())
}
