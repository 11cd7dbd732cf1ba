// crates/spotfinder-core/src/lib.rs

//! # spotfinder-core
//!
//! Proximity search over a point-of-interest catalog. A search combines a
//! free-text query, a comma-separated tag filter and an optional
//! `(lat, lng, radius_km)` circle. The location stage is two-phase: a cheap
//! bounding-box pre-filter followed by the exact haversine test.
//!
//! ```rust
//! use spotfinder_core::prelude::*;
//!
//! let catalog = Catalog::from_entries(vec![
//!     CatalogEntry::new(1, "Tamatsukuri Onsen", 35.4231, 133.0100).with_tags("outdoor,family"),
//!     CatalogEntry::new(2, "Station Bath", 35.4681, 133.0486).with_tags("indoor"),
//! ])?;
//!
//! let criteria = normalize(&RawSearchParams {
//!     tags: Some("outdoor".into()),
//!     ..Default::default()
//! });
//! let hits = catalog.search(&SearchEngine::default(), &criteria);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 1);
//! # Ok::<(), spotfinder_core::SpotError>(())
//! ```

pub mod config;
pub mod criteria;
pub mod error;
pub mod geo;
pub mod loader;
pub mod model;
pub mod search;
pub mod tags;
pub mod text;
pub mod traits;

pub mod prelude;

// Re-exports
pub use crate::config::{SearchConfig, SearchConfigBuilder, TextFolding};
pub use crate::criteria::{normalize, normalize_with, LocationFilter, RawSearchParams, SearchCriteria};
pub use crate::error::{Result, SpotError};
pub use crate::geo::{bounding_box, distance_km, BoundingBox, Coordinate};
pub use crate::model::{Catalog, CatalogEntry, CatalogStats};
pub use crate::search::{search, SearchEngine, SearchReport, SearchResult, Stage, StageCount};
pub use crate::tags::{matches_tags, TagFilter};
pub use crate::text::matches_text;
pub use crate::traits::Searchable;
