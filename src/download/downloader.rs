//! Download orchestration.
//!
//! `Downloader` is the consumer-facing engine: it owns the injected
//! `CommandRunner`, the provisioned cookie path, and the cache directory,
//! and exposes the three pipeline operations: resolve a stream URL, fetch
//! metadata, download to cache. Each request builds its own argument vector
//! and its own output path, so concurrent callers never share mutable state.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::core::utils::{timestamp_token, unique_download_token};
use crate::download::builder::YtdlpArgs;
use crate::download::cache::ensure_cache_dir;
use crate::download::cookies::provision_cookies;
use crate::download::error::DownloadError;
use crate::download::metadata::{parse_meta, Meta};
use crate::download::runner::{CommandRunner, YtdlpRunner};
use crate::download::stream::extract_stream_url;

/// Media resolution and retrieval engine over an injected extractor.
pub struct Downloader {
    runner: Arc<dyn CommandRunner>,
    cookie_path: Option<PathBuf>,
    cache_dir: PathBuf,
}

impl Downloader {
    /// Build an engine from explicit parts. Used directly by tests; most
    /// callers want [`Downloader::from_env`].
    pub fn new(runner: Arc<dyn CommandRunner>, cookie_path: Option<PathBuf>, cache_dir: PathBuf) -> Self {
        Self {
            runner,
            cookie_path,
            cache_dir,
        }
    }

    /// Build the production engine: yt-dlp runner, credentials provisioned
    /// once from `YOUTUBE_COOKIES`, cache directory from `CACHE_DIR`.
    pub fn from_env() -> Self {
        let cookie_path = provision_cookies(
            config::YOUTUBE_COOKIES.as_deref(),
            Path::new(config::YTDL_COOKIES_FILE.as_str()),
        );
        Self::new(
            Arc::new(YtdlpRunner::new()),
            cookie_path,
            PathBuf::from(config::CACHE_DIR.as_str()),
        )
    }

    /// Path of the provisioned cookie file, if any.
    pub fn cookie_path(&self) -> Option<&Path> {
        self.cookie_path.as_deref()
    }

    /// The process-owned cache directory downloads land in.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Resolve a media page URL into a direct playable stream URL.
    ///
    /// No pipeline-imposed deadline; cancel the calling task to abort.
    pub async fn resolve_stream_url(&self, url: &Url) -> AppResult<String> {
        let args = YtdlpArgs::stream_url(url).cookies(self.cookie_path()).build();

        let output = self
            .runner
            .run(&args, None)
            .await
            .map_err(|e| attach_context(e, "stream resolution", url))?;

        extract_stream_url(&output.stdout)
            .map_err(|e| AppError::Download(e.with_context("stream resolution", url.as_str())))
    }

    /// Fetch structured metadata for a media URL.
    ///
    /// The record's origin tag is stamped with the extractor identifier,
    /// regardless of what the JSON contained.
    pub async fn fetch_metadata(&self, url: &Url) -> AppResult<Meta> {
        let template = format!("{}.%(ext)s", timestamp_token());
        let args = YtdlpArgs::metadata(url, &template).cookies(self.cookie_path()).build();

        let output = self
            .runner
            .run(&args, None)
            .await
            .map_err(|e| attach_context(e, "metadata fetch", url))?;

        let mut meta = parse_meta(&output.stdout)
            .map_err(|e| AppError::Download(e.with_context("metadata fetch", url.as_str())))?;
        meta.parser = self.runner.name().to_string();
        Ok(meta)
    }

    /// Download best-available audio into the cache directory.
    ///
    /// Returns the absolute, extension-less base path of the cached file
    /// (the tool picks the extension; see [`find_cached_artifact`]). On any
    /// failure the derived path is cleaned up best-effort and an error
    /// naming the source URL is returned.
    pub async fn download_to_cache(&self, url: &Url) -> AppResult<PathBuf> {
        ensure_cache_dir(&self.cache_dir)?;

        let output_path = self.cache_dir.join(unique_download_token());
        let args = YtdlpArgs::download(url, &output_path)
            .cookies(self.cookie_path())
            .build();

        let run = self
            .runner
            .run(&args, Some(config::download::download_timeout()))
            .await;

        if let Err(e) = run {
            remove_partial_artifacts(&output_path);
            return Err(attach_context(e, "download", url));
        }

        // The relative path is never returned as a fallback.
        std::path::absolute(&output_path).map_err(AppError::Io)
    }
}

/// Attach operation and URL context to a failure, keeping its category.
fn attach_context(err: AppError, operation: &str, url: &Url) -> AppError {
    match err {
        AppError::Download(e) => AppError::Download(e.with_context(operation, url.as_str())),
        other => other,
    }
}

/// Best-effort removal of whatever a failed download left at `base`.
///
/// yt-dlp appends an extension to the requested output path, so both the
/// bare path and any `base.*` siblings are candidates. Removal errors are
/// logged and swallowed; cleanup must never mask the download failure.
fn remove_partial_artifacts(base: &Path) {
    let mut candidates: Vec<PathBuf> = vec![base.to_path_buf()];

    if let (Some(parent), Some(stem)) = (base.parent(), base.file_name().and_then(|n| n.to_str())) {
        let prefix = format!("{}.", stem);
        if let Ok(entries) = std::fs::read_dir(parent) {
            for entry in entries.flatten() {
                let name = entry.file_name();
                if name.to_string_lossy().starts_with(&prefix) {
                    candidates.push(entry.path());
                }
            }
        }
    }

    for path in candidates {
        if path.exists() {
            match std::fs::remove_file(&path) {
                Ok(()) => log::debug!("Removed partial download artifact {}", path.display()),
                Err(e) => log::warn!("Failed to remove partial artifact {}: {}", path.display(), e),
            }
        }
    }
}

/// Locate the file the tool actually wrote for an extension-less base path.
///
/// The engine returns base paths; consumers that need the real file (to
/// copy or probe it) resolve it here. Picks the bare path when it exists,
/// otherwise the first `base.*` sibling.
pub fn find_cached_artifact(base: &Path) -> AppResult<PathBuf> {
    if base.exists() {
        return Ok(base.to_path_buf());
    }

    let parent = base.parent().ok_or_else(|| {
        AppError::Download(DownloadError::Cache(format!(
            "cannot resolve parent directory of {}",
            base.display()
        )))
    })?;
    let stem = base.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        AppError::Download(DownloadError::Cache(format!(
            "cannot resolve file name of {}",
            base.display()
        )))
    })?;

    let prefix = format!("{}.", stem);
    let entries = std::fs::read_dir(parent).map_err(AppError::Io)?;
    for entry in entries.flatten() {
        if entry.file_name().to_string_lossy().starts_with(&prefix) {
            return Ok(entry.path());
        }
    }

    Err(AppError::Download(DownloadError::Cache(format!(
        "no cached artifact found for {}",
        base.display()
    ))))
}
