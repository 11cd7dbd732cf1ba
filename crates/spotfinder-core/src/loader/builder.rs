// crates/spotfinder-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::bincode_options;
use crate::error::Result;
use crate::model::{Catalog, CatalogEntry};
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn preferred() -> Self {
        #[cfg(feature = "compact")]
        let mode = Self::Gzip;
        #[cfg(not(feature = "compact"))]
        let mode = Self::None;
        mode
    }
}

impl Catalog {
    /// Write the catalog as a binary cache readable by [`Catalog::load_binary`].
    pub fn save_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_binary_with(path, CompressionMode::preferred())
    }

    pub fn save_binary_with(&self, path: impl AsRef<Path>, compression: CompressionMode) -> Result<()> {
        let path = path.as_ref();
        write_generic(path, self.entries(), compression)?;
        info!(path = %path.display(), entries = self.len(), ?compression, "saved binary catalog");
        Ok(())
    }

    pub(super) fn write_cache_best_effort(&self, cache: &Path) {
        if let Err(e) = self.save_binary(cache) {
            warn!(cache = %cache.display(), error = %e, "could not write catalog cache");
        }
    }
}

/// Serialize entries with the shared bincode options, optionally gzipped.
fn write_generic(path: &Path, entries: &[CatalogEntry], compression: CompressionMode) -> Result<()> {
    let payload = bincode_options().serialize(entries)?;

    let bytes = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(Vec::with_capacity(payload.len() / 2), Compression::default());
                encoder.write_all(&payload)?;
                encoder.finish()?
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::SpotError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => payload,
    };

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
