//! spotfinder prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::config::{SearchConfig, TextFolding};
pub use crate::criteria::{normalize, normalize_with, RawSearchParams, SearchCriteria};
pub use crate::error::{Result, SpotError};
pub use crate::geo::{bounding_box, distance_km, BoundingBox, Coordinate};
pub use crate::model::{Catalog, CatalogEntry, CatalogStats};
pub use crate::search::{SearchEngine, SearchReport, Stage};
pub use crate::traits::Searchable;
