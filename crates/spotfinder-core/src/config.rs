// crates/spotfinder-core/src/config.rs
use crate::error::{Result, SpotError};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Approximate length of one degree of latitude.
pub const KM_PER_DEGREE: f64 = 111.0;
/// Smallest accepted search radius; smaller requests are clamped up.
pub const MIN_RADIUS_KM: f64 = 1.0;
/// Largest accepted search radius; larger requests are clamped down.
pub const MAX_RADIUS_KM: f64 = 50.0;
/// Floor for `cos(latitude)` when widening the box in longitude.
pub const MIN_COS_LATITUDE: f64 = 0.01;

/// How names, descriptions and tags are folded before substring comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFolding {
    /// Unicode lowercase only. `"露天風呂"` stays as is, `"Onsen"` becomes `"onsen"`.
    #[default]
    Lowercase,
    /// Transliterate to ASCII with `deunicode`, then lowercase (`"Zürich"` -> `"zurich"`).
    ///
    /// Useful for Latin-script catalogs; CJK text is romanized, which makes
    /// short queries much looser.
    Transliterate,
}

impl TextFolding {
    /// Fold `s` according to this mode.
    pub fn fold(self, s: &str) -> String {
        match self {
            Self::Lowercase => s.to_lowercase(),
            Self::Transliterate => deunicode::deunicode(s).to_lowercase(),
        }
    }
}

/// Tunables for the search engine.
///
/// Every constant the pipeline depends on lives here so tests and callers
/// can substitute alternate bounds without touching the matching code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub earth_radius_km: f64,
    pub km_per_degree: f64,
    pub min_radius_km: f64,
    pub max_radius_km: f64,
    pub min_cos_latitude: f64,
    pub text_folding: TextFolding,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            km_per_degree: KM_PER_DEGREE,
            min_radius_km: MIN_RADIUS_KM,
            max_radius_km: MAX_RADIUS_KM,
            min_cos_latitude: MIN_COS_LATITUDE,
            text_folding: TextFolding::Lowercase,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    /// Clamp a requested radius into `[min_radius_km, max_radius_km]`.
    ///
    /// NaN collapses to the lower bound.
    pub fn clamp_radius(&self, radius_km: f64) -> f64 {
        // f64::max ignores NaN, unlike f64::clamp which would propagate it.
        radius_km.max(self.min_radius_km).min(self.max_radius_km)
    }

    /// Reject configurations the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(SpotError::Config(format!("{name} must be a positive number, got {v}")))
            }
        };
        positive("earth_radius_km", self.earth_radius_km)?;
        positive("km_per_degree", self.km_per_degree)?;
        positive("min_radius_km", self.min_radius_km)?;
        positive("max_radius_km", self.max_radius_km)?;
        if self.min_radius_km > self.max_radius_km {
            return Err(SpotError::Config(format!(
                "min_radius_km ({}) exceeds max_radius_km ({})",
                self.min_radius_km, self.max_radius_km
            )));
        }
        if !(self.min_cos_latitude > 0.0 && self.min_cos_latitude <= 1.0) {
            return Err(SpotError::Config(format!(
                "min_cos_latitude must be in (0, 1], got {}",
                self.min_cos_latitude
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SpotError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`SearchConfig`] starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn earth_radius_km(mut self, km: f64) -> Self {
        self.config.earth_radius_km = km;
        self
    }

    pub fn km_per_degree(mut self, km: f64) -> Self {
        self.config.km_per_degree = km;
        self
    }

    /// Set both radius clamp bounds.
    pub fn radius_bounds(mut self, min_km: f64, max_km: f64) -> Self {
        self.config.min_radius_km = min_km;
        self.config.max_radius_km = max_km;
        self
    }

    pub fn min_cos_latitude(mut self, floor: f64) -> Self {
        self.config.min_cos_latitude = floor;
        self
    }

    pub fn text_folding(mut self, folding: TextFolding) -> Self {
        self.config.text_folding = folding;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<SearchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
