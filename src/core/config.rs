use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the engine
/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Optional credential blob for authenticated extraction
/// Read from YOUTUBE_COOKIES environment variable
/// Expected to be a base64-encoded Netscape cookie file; a plain-text cookie
/// file is accepted as a fallback when the value does not decode
/// Default: unset (extraction proceeds unauthenticated)
pub static YOUTUBE_COOKIES: Lazy<Option<String>> = Lazy::new(|| {
    env::var("YOUTUBE_COOKIES").ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
});

/// Path the provisioned cookie file is written to
/// Read from YTDL_COOKIES_FILE environment variable
/// Supports tilde (~) expansion for home directory
/// Default: ./cookies.txt
pub static YTDL_COOKIES_FILE: Lazy<String> = Lazy::new(|| {
    let raw = env::var("YTDL_COOKIES_FILE").unwrap_or_else(|_| "./cookies.txt".to_string());
    shellexpand::tilde(&raw).into_owned()
});

/// Cache directory for downloaded audio artifacts
/// Read from CACHE_DIR environment variable
/// Process-owned scratch storage, wiped wholesale at shutdown
/// Supports tilde (~) expansion for home directory
/// Default: ./cache
pub static CACHE_DIR: Lazy<String> = Lazy::new(|| {
    let raw = env::var("CACHE_DIR").unwrap_or_else(|_| "./cache".to_string());
    shellexpand::tilde(&raw).into_owned()
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: tonearm.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "tonearm.log".to_string()));

/// Download configuration
pub mod download {
    use super::Duration;

    /// Hard deadline for a single download-mode yt-dlp invocation (in seconds)
    /// Stream-resolution and metadata invocations are not bounded here and
    /// rely on the caller's ambient cancellation
    pub const DOWNLOAD_TIMEOUT_SECS: u64 = 300; // 5 minutes

    /// Download deadline duration
    pub fn download_timeout() -> Duration {
        Duration::from_secs(DOWNLOAD_TIMEOUT_SECS)
    }
}

/// yt-dlp binary probe configuration
pub mod probe {
    use super::Duration;

    /// Timeout for the startup `yt-dlp --version` probe (in seconds)
    pub const VERSION_TIMEOUT_SECS: u64 = 10;

    /// Version probe timeout duration
    pub fn version_timeout() -> Duration {
        Duration::from_secs(VERSION_TIMEOUT_SECS)
    }
}
