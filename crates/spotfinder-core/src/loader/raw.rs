// crates/spotfinder-core/src/loader/raw.rs
#![cfg(feature = "json")]

use crate::error::{Result, SpotError};
use crate::model::CatalogEntry;
use serde::Deserialize;

/// Top level of a source catalog file: a bare array or `{ "entries": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogFileRaw {
    List(Vec<EntryRaw>),
    Wrapped { entries: Vec<EntryRaw> },
}

impl CatalogFileRaw {
    pub(crate) fn into_entries(self) -> Vec<EntryRaw> {
        match self {
            Self::List(v) | Self::Wrapped { entries: v } => v,
        }
    }
}

/// Raw entry as exported by an admin database. Coordinates may arrive as
/// numbers or strings, tags as one joined string or a list.
#[derive(Debug, Deserialize)]
pub(crate) struct EntryRaw {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<TagsRaw>,
    #[serde(alias = "lat")]
    pub latitude: NumberRaw,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: NumberRaw,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberRaw {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TagsRaw {
    Joined(String),
    List(Vec<String>),
}

impl NumberRaw {
    fn to_f64(&self, id: u64, field: &str) -> Result<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                SpotError::InvalidData(format!("entry {id}: {field} {s:?} is not a number"))
            }),
        }
    }
}

impl TagsRaw {
    fn joined(self) -> String {
        match self {
            Self::Joined(s) => s,
            Self::List(v) => v.join(","),
        }
    }
}

impl EntryRaw {
    /// **Raw -> Domain.** Range checks happen in `Catalog::from_entries`.
    pub(crate) fn into_entry(self) -> Result<CatalogEntry> {
        let latitude = self.latitude.to_f64(self.id, "latitude")?;
        let longitude = self.longitude.to_f64(self.id, "longitude")?;
        Ok(CatalogEntry {
            id: self.id,
            name: self.name,
            description: self.description.filter(|d| !d.trim().is_empty()),
            tags: self.tags.map(TagsRaw::joined).unwrap_or_default(),
            latitude,
            longitude,
        })
    }
}
