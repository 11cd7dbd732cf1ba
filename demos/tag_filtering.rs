//! Tag filtering example for spotfinder-rs
//!
//! Tag filters are comma-separated and OR-ed: an entry matches when any
//! filter term is a substring of its tag string. With
//! `TextFolding::Transliterate` non-Latin tags can be matched by their
//! romanization.

use spotfinder_core::prelude::*;

fn main() -> Result<()> {
    let catalog = Catalog::from_entries(vec![
        CatalogEntry::new(1, "Zürich Seebad", 47.3600, 8.5400).with_tags("Outdoor,Familie"),
        CatalogEntry::new(2, "Hallenbad City", 47.3780, 8.5300).with_tags("indoor"),
        CatalogEntry::new(3, "露天風呂の宿", 35.4231, 133.0100).with_tags("露天風呂,家族風呂"),
    ])?;

    println!("Distinct tags: {:?}\n", catalog.distinct_tags());

    let lowercase = SearchEngine::default();
    let transliterate = SearchEngine::new(
        SearchConfig::builder()
            .text_folding(TextFolding::Transliterate)
            .build()?,
    );

    for filter in ["outdoor", "indoor, familie", "家族", "zurich", "lu tian"] {
        let by_tag = SearchCriteria::new().tags(filter);
        let by_text = SearchCriteria::new().text(filter);
        let ids = |engine: &SearchEngine, c: &SearchCriteria| {
            catalog.search(engine, c).iter().map(|e| e.id).collect::<Vec<_>>()
        };
        println!("{filter:?}");
        println!("  tags, lowercase:     {:?}", ids(&lowercase, &by_tag));
        println!("  tags, transliterate: {:?}", ids(&transliterate, &by_tag));
        println!("  text, transliterate: {:?}", ids(&transliterate, &by_text));
    }

    Ok(())
}
