//! Cache-area lifecycle.
//!
//! The cache directory is process-owned scratch storage: created on demand
//! before the first download, removed wholesale at shutdown. Teardown never
//! blocks shutdown: removal failures are logged and swallowed.

use std::path::Path;

use crate::core::error::AppError;
use crate::download::error::DownloadError;

/// Idempotently create the cache directory. Creation failure is fatal to
/// the calling download; no subprocess is spawned without a cache area.
pub fn ensure_cache_dir(dir: &Path) -> Result<(), AppError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AppError::Download(DownloadError::Cache(format!(
            "failed to create cache directory {}: {}",
            dir.display(),
            e
        )))
    })
}

/// Recursively remove the cache directory and everything beneath it.
/// Called once at process shutdown; failures are logged, never escalated.
pub fn teardown_cache(dir: &Path) {
    if !dir.exists() {
        log::debug!("Cache directory {} already absent, nothing to tear down", dir.display());
        return;
    }

    match std::fs::remove_dir_all(dir) {
        Ok(()) => log::info!("Cache directory {} removed", dir.display()),
        Err(e) => log::warn!("Failed to remove cache directory {}: {}", dir.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_cache_dir_is_idempotent() {
        let root = tempdir().unwrap();
        let dir = root.path().join("cache");

        ensure_cache_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Second call on an existing directory is a no-op
        ensure_cache_dir(&dir).unwrap();
    }

    #[test]
    fn test_ensure_cache_dir_failure_is_cache_error() {
        let root = tempdir().unwrap();
        let file = root.path().join("occupied");
        std::fs::write(&file, b"not a directory").unwrap();

        let err = ensure_cache_dir(&file).unwrap_err();
        match err {
            AppError::Download(d) => assert_eq!(d.subcategory(), "cache"),
            other => panic!("expected cache error, got {}", other),
        }
    }

    #[test]
    fn test_teardown_removes_populated_directory() {
        let root = tempdir().unwrap();
        let dir = root.path().join("cache");
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("20260101_120000_0000.opus"), b"audio").unwrap();
        std::fs::write(dir.join("nested").join("leftover"), b"x").unwrap();

        teardown_cache(&dir);
        assert!(!dir.exists());
    }

    #[test]
    fn test_teardown_on_absent_directory_is_silent() {
        let root = tempdir().unwrap();
        teardown_cache(&root.path().join("never-created"));
    }
}
