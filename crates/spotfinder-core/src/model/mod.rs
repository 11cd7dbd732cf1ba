// crates/spotfinder-core/src/model/mod.rs
pub mod catalog;
pub mod entry;

pub use catalog::{Catalog, CatalogStats};
pub use entry::CatalogEntry;

/// The file extension to use for the binary cache of a catalog.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";
