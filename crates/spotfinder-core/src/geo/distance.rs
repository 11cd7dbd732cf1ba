// crates/spotfinder-core/src/geo/distance.rs
use super::Coordinate;
use crate::config::EARTH_RADIUS_KM;

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Haversine formula on a sphere of radius 6371 km. Symmetric, never
/// negative, and zero for identical points.
///
/// # Examples
///
/// ```rust
/// use spotfinder_core::distance_km;
///
/// // Tokyo -> Osaka
/// let d = distance_km(35.6762, 139.6503, 34.6937, 135.5023);
/// assert!((d - 400.0).abs() < 50.0);
/// ```
#[inline]
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    haversine_km(
        EARTH_RADIUS_KM,
        Coordinate::new(lat1, lng1),
        Coordinate::new(lat2, lng2),
    )
}

/// Haversine distance on a sphere of the given radius.
#[inline]
pub fn haversine_km(earth_radius_km: f64, a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1]; sqrt of a negative is NaN.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    earth_radius_km * c
}
