// crates/spotfinder-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary vs JSON). Loading is a single blocking read done
//! before any search; the search pipeline itself never touches I/O.

use crate::error::Result;
use crate::model::{Catalog, CatalogEntry};
use bincode::Options;
use std::path::Path;
use tracing::debug;

mod common_io;

#[cfg(feature = "builder")]
mod builder;
#[cfg(feature = "builder")]
pub use builder::CompressionMode;

#[cfg(feature = "json")]
mod raw;

/// Upper bound for a binary catalog, guards against corrupt length prefixes.
pub const BINARY_SIZE_LIMIT: u64 = 256 * 1024 * 1024;

pub(crate) fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(BINARY_SIZE_LIMIT)
}

impl Catalog {
    /// **Universal Loader:** picks the parser from the file name.
    ///
    /// `*.json` and `*.json.gz` go through the JSON parser, anything else is
    /// treated as a binary catalog.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".json") || name.ends_with(".json.gz") {
            #[cfg(feature = "json")]
            return Self::load_json(path);
            #[cfg(not(feature = "json"))]
            return Err(crate::error::SpotError::InvalidData(format!(
                "{} is JSON but the 'json' feature is disabled",
                path.display()
            )));
        }
        Self::load_binary(path)
    }

    /// **Binary Loader:** bincode, optionally gzip-wrapped.
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = common_io::read_payload(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Decode a binary catalog and re-validate its entries.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let entries: Vec<CatalogEntry> = bincode_options().deserialize(data)?;
        debug!(entries = entries.len(), "decoded binary catalog");
        Self::from_entries(entries)
    }

    /// **Source Loader:** parse a JSON catalog (`.json` or gzip-compressed).
    #[cfg(feature = "json")]
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = common_io::read_payload(path.as_ref())?;
        Self::from_json_slice(&bytes)
    }

    /// Parse a JSON catalog from memory.
    ///
    /// Accepts a bare array or `{ "entries": [...] }`; coordinates may be
    /// numbers or numeric strings, tags a joined string or a list.
    #[cfg(feature = "json")]
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let file: raw::CatalogFileRaw = serde_json::from_slice(data)?;
        let entries = file
            .into_entries()
            .into_iter()
            .map(raw::EntryRaw::into_entry)
            .collect::<Result<Vec<_>>>()?;
        debug!(entries = entries.len(), "parsed JSON catalog");
        Self::from_entries(entries)
    }

    /// Path of the binary cache that [`Catalog::load_cached`] keeps next to `source`.
    pub fn cache_path_for(source: impl AsRef<Path>) -> Result<std::path::PathBuf> {
        common_io::get_cache_path(source.as_ref(), crate::model::CACHE_SUFFIX)
    }

    /// **Smart Load:** reuse a fresh binary cache or parse the source JSON.
    ///
    /// With the `builder` feature the cache is (re)written best-effort after a
    /// parse; a failed write is logged and otherwise ignored.
    #[cfg(feature = "json")]
    pub fn load_cached(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache = Self::cache_path_for(source)?;

        if common_io::is_cache_fresh(source, &cache) {
            match Self::load_binary(&cache) {
                Ok(catalog) => {
                    tracing::info!(cache = %cache.display(), "using binary catalog cache");
                    return Ok(catalog);
                }
                Err(e) => tracing::warn!(cache = %cache.display(), error = %e, "stale or corrupt cache, rebuilding"),
            }
        }

        let catalog = Self::load_json(source)?;

        #[cfg(feature = "builder")]
        catalog.write_cache_best_effort(&cache);

        Ok(catalog)
    }
}
