// crates/spotfinder-core/src/model/catalog.rs
use super::CatalogEntry;
use crate::criteria::SearchCriteria;
use crate::error::{Result, SpotError};
use crate::geo::BoundingBox;
use crate::search::{SearchEngine, SearchReport, SearchResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// An ordered, immutable collection of [`CatalogEntry`].
///
/// Order is the insertion order of the source and is what every search
/// result preserves.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Aggregate counts for a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub entries: usize,
    /// Entries carrying at least one non-blank tag.
    pub tagged: usize,
    pub distinct_tags: usize,
    /// Smallest box enclosing every entry; `None` when empty.
    pub bounds: Option<BoundingBox>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range coordinates.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for e in &entries {
            if !e.coordinate().is_valid() {
                return Err(SpotError::InvalidData(format!(
                    "entry {} ({}) has invalid coordinates {}",
                    e.id,
                    e.name,
                    e.coordinate()
                )));
            }
            if !seen.insert(e.id) {
                return Err(SpotError::InvalidData(format!("duplicate entry id {}", e.id)));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by id. Linear scan.
    pub fn get(&self, id: u64) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// All tags used in the catalog, deduplicated case-insensitively.
    ///
    /// The first spelling seen wins; output is sorted by lowercase form.
    pub fn distinct_tags(&self) -> Vec<&str> {
        let mut tags: BTreeMap<String, &str> = BTreeMap::new();
        for tag in self.entries.iter().flat_map(CatalogEntry::tag_list) {
            tags.entry(tag.to_lowercase()).or_insert(tag);
        }
        tags.into_values().collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            entries: self.entries.len(),
            tagged: self
                .entries
                .iter()
                .filter(|e| e.tag_list().next().is_some())
                .count(),
            distinct_tags: self.distinct_tags().len(),
            bounds: BoundingBox::enclosing(self.entries.iter().map(CatalogEntry::coordinate)),
        }
    }

    /// Run `criteria` against this catalog.
    pub fn search<'a>(
        &'a self,
        engine: &SearchEngine,
        criteria: &SearchCriteria,
    ) -> SearchResult<'a, CatalogEntry> {
        engine.search(&self.entries, criteria)
    }

    /// Like [`Catalog::search`], also returning per-stage candidate counts.
    pub fn search_with_report<'a>(
        &'a self,
        engine: &SearchEngine,
        criteria: &SearchCriteria,
    ) -> (SearchResult<'a, CatalogEntry>, SearchReport) {
        engine.search_with_report(&self.entries, criteria)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
