// crates/spotfinder-core/src/tags.rs
use crate::config::TextFolding;
use crate::traits::Searchable;
use serde::{Deserialize, Serialize};

/// A parsed comma-separated tag filter.
///
/// Terms are trimmed and blank terms dropped. An entry matches when its tag
/// string contains ANY term as a case-insensitive substring; the entry side
/// is not split, so `"露天"` matches `"露天風呂,家族風呂"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    terms: Vec<String>,
}

impl TagFilter {
    /// Parse `filter`. Returns `None` when no non-blank term remains
    /// (`""`, `" , ,"`), which callers treat as "no tag filter".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spotfinder_core::TagFilter;
    ///
    /// let f = TagFilter::parse(" rotenburo, ,family ").unwrap();
    /// assert_eq!(f.terms(), ["rotenburo", "family"]);
    /// assert!(TagFilter::parse(" , ").is_none());
    /// ```
    pub fn parse(filter: &str) -> Option<Self> {
        let terms: Vec<String> = filter
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();
        if terms.is_empty() {
            None
        } else {
            Some(Self { terms })
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// OR-membership over the terms, using `folding` on both sides.
    pub fn matches_with<T: Searchable + ?Sized>(&self, entry: &T, folding: TextFolding) -> bool {
        let haystack = folding.fold(entry.tags_str());
        self.terms
            .iter()
            .any(|term| haystack.contains(&folding.fold(term)))
    }

    pub fn matches<T: Searchable + ?Sized>(&self, entry: &T) -> bool {
        self.matches_with(entry, TextFolding::Lowercase)
    }
}

/// `true` if `entry` passes the comma-separated `tag_filter`.
///
/// An absent, empty or all-blank filter matches every entry.
pub fn matches_tags<T: Searchable + ?Sized>(entry: &T, tag_filter: Option<&str>) -> bool {
    match tag_filter.and_then(TagFilter::parse) {
        Some(filter) => filter.matches(entry),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogEntry;

    fn tagged(tags: &str) -> CatalogEntry {
        CatalogEntry::new(1, "spot", 35.0, 133.0).with_tags(tags)
    }

    #[test]
    fn absent_or_blank_filter_matches_all() {
        let e = tagged("outdoor");
        assert!(matches_tags(&e, None));
        assert!(matches_tags(&e, Some("")));
        assert!(matches_tags(&e, Some(" ,, , ")));
        assert!(matches_tags(&tagged(""), Some(",")));
    }

    #[test]
    fn any_term_suffices() {
        let e = tagged("露天風呂,家族風呂");
        assert!(matches_tags(&e, Some("rotenburo, 家族")));
        assert!(!matches_tags(&e, Some("rotenburo, family")));
    }

    #[test]
    fn substring_not_equality() {
        let e = tagged("outdoor-bath,sauna");
        assert!(matches_tags(&e, Some("door")));
        assert!(matches_tags(&e, Some("OUTDOOR")));
    }

    #[test]
    fn untagged_entry_fails_non_empty_filter() {
        assert!(!matches_tags(&tagged(""), Some("outdoor")));
    }

    #[test]
    fn terms_are_trimmed() {
        let f = TagFilter::parse("  indoor  ,outdoor").unwrap();
        assert_eq!(f.terms(), ["indoor", "outdoor"]);
        assert!(f.matches(&tagged("indoor")));
    }

    #[test]
    fn transliterated_terms() {
        let e = tagged("Thermalbad,Sauna");
        let f = TagFilter::parse("thérmal").unwrap();
        assert!(!f.matches(&e));
        assert!(f.matches_with(&e, TextFolding::Transliterate));
    }
}
