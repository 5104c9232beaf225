//! yt-dlp binary health checks.

use tokio::process::Command;
use tokio::time::timeout;

use crate::core::config;
use crate::core::error::AppError;
use crate::download::error::DownloadError;

/// Query the configured yt-dlp binary for its version string.
pub async fn ytdlp_version() -> Result<String, AppError> {
    let ytdl_bin = config::YTDL_BIN.as_str();

    let output = timeout(
        config::probe::version_timeout(),
        Command::new(ytdl_bin).arg("--version").output(),
    )
    .await
    .map_err(|_| AppError::Download(DownloadError::Timeout("yt-dlp --version timed out".to_string())))?
    .map_err(|e| AppError::Download(DownloadError::Process(format!("failed to execute {}: {}", ytdl_bin, e))))?;

    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() {
        return Err(AppError::Download(DownloadError::YtDlp(
            "yt-dlp is not installed or --version produced no output".to_string(),
        )));
    }

    Ok(version)
}

/// Log the extractor version at startup. A missing binary is worth a loud
/// warning up front instead of a confusing failure on the first request.
pub async fn log_ytdlp_version() {
    match ytdlp_version().await {
        Ok(version) => log::info!("yt-dlp version: {}", version),
        Err(e) => log::warn!("yt-dlp probe failed: {}. Extraction requests will not work", e),
    }
}
