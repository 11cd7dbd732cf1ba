// crates/spotfinder-core/src/text.rs

//! Free-text matching: trimmed, case-insensitive substring containment over
//! the name and description of an entry. No tokenization, no scoring.

use crate::config::TextFolding;
use crate::traits::Searchable;

/// A prepared text query, folded once and reused for every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    folded: String,
    folding: TextFolding,
}

impl TextQuery {
    /// Returns `None` for a blank query, which means "match everything".
    pub fn new(query: &str, folding: TextFolding) -> Option<Self> {
        let q = query.trim();
        if q.is_empty() {
            return None;
        }
        Some(Self {
            folded: folding.fold(q),
            folding,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// `true` if the name or the description contains the query.
    pub fn matches<T: Searchable + ?Sized>(&self, entry: &T) -> bool {
        self.folding.fold(entry.name_str()).contains(&self.folded)
            || entry
                .description_str()
                .is_some_and(|d| self.folding.fold(d).contains(&self.folded))
    }
}

/// Case-insensitive substring match of `query` against name OR description.
///
/// An absent or blank query matches every entry.
///
/// # Examples
///
/// ```rust
/// use spotfinder_core::{matches_text, CatalogEntry};
///
/// let e = CatalogEntry::new(1, "Kaike Onsen", 35.45, 133.37)
///     .with_description("Seaside hot spring resort");
/// assert!(matches_text(&e, Some("  ONSEN ")));
/// assert!(matches_text(&e, Some("seaside")));
/// assert!(matches_text(&e, None));
/// assert!(!matches_text(&e, Some("mountain")));
/// ```
pub fn matches_text<T: Searchable + ?Sized>(entry: &T, query: Option<&str>) -> bool {
    match query.and_then(|q| TextQuery::new(q, TextFolding::Lowercase)) {
        Some(q) => q.matches(entry),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogEntry;

    fn entry() -> CatalogEntry {
        CatalogEntry::new(1, "Tamatsukuri 露天風呂", 35.42, 133.01)
    }

    #[test]
    fn blank_queries_match_everything() {
        let e = entry();
        assert!(matches_text(&e, None));
        assert!(matches_text(&e, Some("")));
        assert!(matches_text(&e, Some("   \t")));
    }

    #[test]
    fn matches_name_case_insensitively() {
        let e = entry();
        assert!(matches_text(&e, Some("TAMATSU")));
        assert!(matches_text(&e, Some("露天")));
        assert!(!matches_text(&e, Some("kaike")));
    }

    #[test]
    fn missing_description_only_checks_name() {
        let e = entry();
        assert!(e.description.is_none());
        assert!(!matches_text(&e, Some("spring")));
        let e = e.with_description("Hot SPRING by the river");
        assert!(matches_text(&e, Some("spring")));
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let e = CatalogEntry::new(1, "Old Town Bath", 0.0, 0.0);
        assert!(matches_text(&e, Some("town bath")));
        assert!(!matches_text(&e, Some("town  bath")));
    }

    #[test]
    fn query_is_folded_once() {
        let q = TextQuery::new("  Zürich Bath ", TextFolding::Lowercase).unwrap();
        assert_eq!(q.as_str(), "zürich bath");
        let q = TextQuery::new("Zürich", TextFolding::Transliterate).unwrap();
        assert_eq!(q.as_str(), "zurich");
        assert!(TextQuery::new(" ", TextFolding::Lowercase).is_none());
    }

    #[test]
    fn transliterated_query_ignores_accents() {
        let e = CatalogEntry::new(1, "Zürich Thermalbad", 47.37, 8.54);
        assert!(!matches_text(&e, Some("zurich")));
        let q = TextQuery::new("zurich", TextFolding::Transliterate).unwrap();
        assert!(q.matches(&e));
    }
}
