// crates/spotfinder-core/src/geo/mod.rs

//! # Geometry
//!
//! The two pure functions behind the location filter: [`distance_km`]
//! (exact verifier) and [`bounding_box`] (cheap accelerator). They are kept
//! independent so a storage backend can evaluate the box as two range
//! predicates and leave the exact test to the engine.

mod bbox;
mod distance;

pub use bbox::{bounding_box, BoundingBox};
pub use distance::{distance_km, haversine_km};

use serde::{Deserialize, Serialize};

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` if both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance to `other` on the default Earth radius.
    pub fn distance_km_to(&self, other: &Self) -> f64 {
        distance_km(self.lat, self.lng, other.lat, other.lng)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
