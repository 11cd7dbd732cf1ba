// crates/spotfinder-core/src/criteria.rs

//! # Search criteria
//!
//! [`RawSearchParams`] mirrors the loosely typed query-string parameters
//! (`q`, `tags`, `lat`, `lng`, `radius_km`). [`normalize`] validates them once
//! into a typed [`SearchCriteria`]; the engine never sees raw strings.
//!
//! Malformed input degrades instead of failing:
//! - a missing or blank `lat`, `lng` or `radius_km` disables the location filter;
//! - an unparsable or non-finite `lat`/`lng` disables the location filter;
//! - an unparsable `radius_km` counts as 0 and is clamped up to the minimum;
//! - radius is clamped to `[min_radius_km, max_radius_km]`, latitude to
//!   `[-90, 90]`, longitude is wrapped into `[-180, 180]`.

use crate::config::SearchConfig;
use crate::geo::Coordinate;
use crate::tags::TagFilter;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Untyped search parameters as received from a transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSearchParams {
    pub q: Option<String>,
    pub tags: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius_km: Option<String>,
}

/// A validated circle: center plus clamped radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub center: Coordinate,
    pub radius_km: f64,
}

impl LocationFilter {
    /// Build a filter, clamping the radius and the center into valid ranges.
    ///
    /// Returns `None` if either center component is not finite.
    pub fn new(center: Coordinate, radius_km: f64, config: &SearchConfig) -> Option<Self> {
        if !center.lat.is_finite() || !center.lng.is_finite() {
            return None;
        }
        Some(Self {
            center: Coordinate::new(center.lat.clamp(-90.0, 90.0), wrap_longitude(center.lng)),
            radius_km: config.clamp_radius(radius_km),
        })
    }
}

/// Typed search criteria. Every field is optional; `Default` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub text_query: Option<String>,
    pub tag_filter: Option<TagFilter>,
    pub location: Option<LocationFilter>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query; blank text clears it.
    pub fn text(mut self, query: &str) -> Self {
        let q = query.trim();
        self.text_query = (!q.is_empty()).then(|| q.to_owned());
        self
    }

    /// Set the comma-separated tag filter; an all-blank filter clears it.
    pub fn tags(mut self, filter: &str) -> Self {
        self.tag_filter = TagFilter::parse(filter);
        self
    }

    /// Restrict to a circle; radius and center are clamped with `config`.
    pub fn within(mut self, center: Coordinate, radius_km: f64, config: &SearchConfig) -> Self {
        self.location = LocationFilter::new(center, radius_km, config);
        self
    }

    /// `true` when no criterion is set.
    pub fn is_unconstrained(&self) -> bool {
        self.text_query.is_none() && self.tag_filter.is_none() && self.location.is_none()
    }
}

/// Normalize raw parameters with the default [`SearchConfig`].
///
/// # Examples
///
/// ```rust
/// use spotfinder_core::{normalize, RawSearchParams};
///
/// let criteria = normalize(&RawSearchParams {
///     q: Some("  onsen ".into()),
///     lat: Some("35.4681".into()),
///     lng: Some("133.0486".into()),
///     radius_km: Some("1000".into()),
///     ..Default::default()
/// });
/// assert_eq!(criteria.text_query.as_deref(), Some("onsen"));
/// assert_eq!(criteria.location.unwrap().radius_km, 50.0);
/// ```
pub fn normalize(raw: &RawSearchParams) -> SearchCriteria {
    normalize_with(raw, &SearchConfig::default())
}

/// Normalize raw parameters against an explicit configuration.
pub fn normalize_with(raw: &RawSearchParams, config: &SearchConfig) -> SearchCriteria {
    SearchCriteria {
        text_query: non_blank(raw.q.as_deref()).map(str::to_owned),
        tag_filter: raw.tags.as_deref().and_then(TagFilter::parse),
        location: normalize_location(raw, config),
    }
}

fn normalize_location(raw: &RawSearchParams, config: &SearchConfig) -> Option<LocationFilter> {
    let lat = non_blank(raw.lat.as_deref());
    let lng = non_blank(raw.lng.as_deref());
    let radius = non_blank(raw.radius_km.as_deref());

    let (lat, lng, radius) = match (lat, lng, radius) {
        (Some(lat), Some(lng), Some(radius)) => (lat, lng, radius),
        (None, None, None) => return None,
        _ => {
            warn!("incomplete location parameters (lat, lng and radius_km are all required); location filter disabled");
            return None;
        }
    };

    let (Some(lat), Some(lng)) = (parse_coordinate("lat", lat), parse_coordinate("lng", lng)) else {
        return None;
    };

    let radius_km = radius.parse::<f64>().unwrap_or_else(|_| {
        warn!(radius_km = radius, "unparsable radius, treating as 0");
        0.0
    });

    LocationFilter::new(Coordinate::new(lat, lng), radius_km, config)
}

fn parse_coordinate(field: &str, value: &str) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            warn!(field, value, "unparsable coordinate; location filter disabled");
            None
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Wrap a longitude into `[-180, 180]`; values already in range are unchanged.
fn wrap_longitude(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}
