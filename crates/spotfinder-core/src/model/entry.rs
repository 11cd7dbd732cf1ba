// crates/spotfinder-core/src/model/entry.rs
use crate::geo::Coordinate;
use crate::traits::Searchable;
use serde::{Deserialize, Serialize};

/// One point of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-separated, unsegmented tag string.
    #[serde(default)]
    pub tags: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CatalogEntry {
    pub fn new(id: u64, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            tags: String::new(),
            latitude,
            longitude,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Individual tags, trimmed, empty segments skipped.
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags.split(',').map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl Searchable for CatalogEntry {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn description_str(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags_str(&self) -> &str {
        &self.tags
    }

    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
