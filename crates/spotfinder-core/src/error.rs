// crates/spotfinder-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading catalogs or configuration.
///
/// The search pipeline itself never fails; malformed search parameters are
/// degraded by the normalizer instead of surfacing here.
#[derive(Debug, Error)]
pub enum SpotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid catalog data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SpotError>;
