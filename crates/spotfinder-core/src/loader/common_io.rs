// crates/spotfinder-core/src/loader/common_io.rs
use crate::error::{Result, SpotError};
use std::fs;
use std::path::{Path, PathBuf};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a whole file, transparently inflating it when it starts with the
/// gzip magic bytes.
pub(crate) fn read_payload(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| {
        SpotError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        use std::io::Read;

        let mut out = Vec::with_capacity(bytes.len() * 4);
        GzDecoder::new(bytes.as_slice()).read_to_end(&mut out)?;
        Ok(out)
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(SpotError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// `catalog.json.gz` -> `catalog.json.gz.<suffix>` next to the source.
pub(crate) fn get_cache_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    let filename = source.file_name().ok_or_else(|| {
        SpotError::InvalidData(format!("{} has no file name", source.display()))
    })?;
    Ok(source.with_file_name(format!("{}.{suffix}", filename.to_string_lossy())))
}

/// `true` if `cache` exists and is at least as new as `source`.
pub(crate) fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone: the cache is all we have.
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("/data/spots.json.gz"), "comp.bin").unwrap();
        assert_eq!(p, PathBuf::from("/data/spots.json.gz.comp.bin"));
        assert!(get_cache_path(Path::new("/"), "bin").is_err());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_payload(Path::new("/definitely/not/here.json"));
        assert!(matches!(err, Err(SpotError::NotFound(_))));
    }

    #[test]
    fn plain_bytes_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.json");
        fs::write(&path, b"[]").unwrap();
        assert_eq!(read_payload(&path).unwrap(), b"[]");
        assert!(!is_cache_fresh(&path, &dir.path().join("missing.bin")));
    }
}
