// crates/spotfinder-core/src/geo/bbox.rs
use super::Coordinate;
use crate::config::SearchConfig;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Axis-aligned latitude/longitude rectangle used as a containment pre-filter.
///
/// Longitude bounds may extend past ±180 when the circle crosses the
/// antimeridian; [`BoundingBox::contains`] accounts for that. A box whose
/// longitude is unconstrained spans exactly `-180.0..=180.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// Bounding box around `(center_lat, center_lng)` covering every point within
/// `radius_km`, using the default [`SearchConfig`].
///
/// # Examples
///
/// ```rust
/// use spotfinder_core::bounding_box;
///
/// let bbox = bounding_box(35.4681, 133.0486, 10.0);
/// assert!(bbox.contains(35.4681, 133.0486));
/// assert!((bbox.lat_max - bbox.lat_min - 20.0 / 111.0).abs() < 1e-9);
/// ```
pub fn bounding_box(center_lat: f64, center_lng: f64, radius_km: f64) -> BoundingBox {
    BoundingBox::around(
        Coordinate::new(center_lat, center_lng),
        radius_km,
        &SearchConfig::default(),
    )
}

impl BoundingBox {
    /// Superset rectangle of the circle `(center, radius_km)`.
    ///
    /// 1° latitude ≈ `km_per_degree`, 1° longitude ≈ `km_per_degree * cos(lat)`.
    /// `km_per_degree` is capped at the true arc length of one degree on
    /// `earth_radius_km`, so the box cannot undershoot the sphere the exact
    /// stage measures on. The cosine is floored at `min_cos_latitude`. Near the poles the flat
    /// approximation undershoots, so the longitude half-width is never smaller
    /// than the exact spherical one, and a circle that reaches a pole leaves
    /// longitude unconstrained.
    pub fn around(center: Coordinate, radius_km: f64, config: &SearchConfig) -> Self {
        let km_per_degree = config
            .km_per_degree
            .min(config.earth_radius_km.to_radians());
        let lat_delta = radius_km / km_per_degree;
        let lat_min = center.lat - lat_delta;
        let lat_max = center.lat + lat_delta;

        if lat_max >= 90.0 || lat_min <= -90.0 {
            return Self {
                lat_min: lat_min.max(-90.0),
                lat_max: lat_max.min(90.0),
                lng_min: -180.0,
                lng_max: 180.0,
            };
        }

        let cos_lat = center.lat.to_radians().cos();
        let approx = radius_km / (km_per_degree * cos_lat.max(config.min_cos_latitude));

        // The floor only guards the division above; the exact half-width
        // must see the true cosine or it would shrink near the poles.
        let sin_angular = (radius_km / config.earth_radius_km).sin();
        let lng_delta = if sin_angular >= cos_lat {
            f64::INFINITY
        } else {
            approx.max((sin_angular / cos_lat).asin().to_degrees())
        };

        if lng_delta >= 180.0 {
            return Self {
                lat_min,
                lat_max,
                lng_min: -180.0,
                lng_max: 180.0,
            };
        }

        Self {
            lat_min,
            lat_max,
            lng_min: center.lng - lng_delta,
            lng_max: center.lng + lng_delta,
        }
    }

    /// `true` if `(lat, lng)` lies inside the box (bounds inclusive).
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        if lat < self.lat_min || lat > self.lat_max {
            return false;
        }
        let in_lng = |x: f64| x >= self.lng_min && x <= self.lng_max;
        in_lng(lng) || in_lng(lng + 360.0) || in_lng(lng - 360.0)
    }

    #[inline]
    pub fn contains_point(&self, point: &Coordinate) -> bool {
        self.contains(point.lat, point.lng)
    }

    /// Latitude bounds as a range predicate.
    pub fn lat_range(&self) -> RangeInclusive<f64> {
        self.lat_min..=self.lat_max
    }

    /// Longitude bounds as a range predicate.
    ///
    /// Storage layers evaluating this directly must split the range when
    /// [`BoundingBox::crosses_antimeridian`] is true.
    pub fn lng_range(&self) -> RangeInclusive<f64> {
        self.lng_min..=self.lng_max
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.lng_min < -180.0 || self.lng_max > 180.0
    }

    pub fn is_longitude_unconstrained(&self) -> bool {
        self.lng_min <= -180.0 && self.lng_max >= 180.0
    }

    /// Smallest box covering all `points`, or `None` for an empty input.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self {
                    lat_min: p.lat,
                    lat_max: p.lat,
                    lng_min: p.lng,
                    lng_max: p.lng,
                },
                Some(b) => Self {
                    lat_min: b.lat_min.min(p.lat),
                    lat_max: b.lat_max.max(p.lat),
                    lng_min: b.lng_min.min(p.lng),
                    lng_max: b.lng_max.max(p.lng),
                },
            })
        })
    }
}
