use std::fmt;

/// Structured error type for extraction and download operations.
///
/// Categorized variants keep failure classes distinguishable for logging
/// and diagnostics while the Display output stays a plain message.
#[derive(Debug)]
pub enum DownloadError {
    /// yt-dlp specific failures (binary not found, bad exit code, etc.)
    YtDlp(String),
    /// Extraction or download exceeded its deadline
    Timeout(String),
    /// Extractor output contained no playable URL line
    NoStreamUrl(String),
    /// Extractor metadata output was not valid JSON
    Metadata(String),
    /// Cache directory or cache path failures
    Cache(String),
    /// Process execution failure (spawn, exit code)
    Process(String),
    /// Catch-all for uncategorized errors
    Other(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::YtDlp(msg) => write!(f, "{}", msg),
            DownloadError::Timeout(msg) => write!(f, "{}", msg),
            DownloadError::NoStreamUrl(msg) => write!(f, "{}", msg),
            DownloadError::Metadata(msg) => write!(f, "{}", msg),
            DownloadError::Cache(msg) => write!(f, "{}", msg),
            DownloadError::Process(msg) => write!(f, "{}", msg),
            DownloadError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

impl DownloadError {
    /// Returns subcategory for logging and diagnostics
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::YtDlp(_) => "ytdlp",
            DownloadError::Timeout(_) => "timeout",
            DownloadError::NoStreamUrl(_) => "no_stream_url",
            DownloadError::Metadata(_) => "metadata",
            DownloadError::Cache(_) => "cache",
            DownloadError::Process(_) => "process",
            DownloadError::Other(_) => "other",
        }
    }

    /// Returns the inner message
    pub fn message(&self) -> &str {
        match self {
            DownloadError::YtDlp(msg)
            | DownloadError::Timeout(msg)
            | DownloadError::NoStreamUrl(msg)
            | DownloadError::Metadata(msg)
            | DownloadError::Cache(msg)
            | DownloadError::Process(msg)
            | DownloadError::Other(msg) => msg,
        }
    }

    /// Prefix the message with the operation and target URL, keeping the
    /// category. Every failure surfaced to a caller carries this context.
    pub fn with_context(self, operation: &str, url: &str) -> Self {
        let wrap = |msg: String| format!("{} failed for {}: {}", operation, url, msg);
        match self {
            DownloadError::YtDlp(msg) => DownloadError::YtDlp(wrap(msg)),
            DownloadError::Timeout(msg) => DownloadError::Timeout(wrap(msg)),
            DownloadError::NoStreamUrl(msg) => DownloadError::NoStreamUrl(wrap(msg)),
            DownloadError::Metadata(msg) => DownloadError::Metadata(wrap(msg)),
            DownloadError::Cache(msg) => DownloadError::Cache(wrap(msg)),
            DownloadError::Process(msg) => DownloadError::Process(wrap(msg)),
            DownloadError::Other(msg) => DownloadError::Other(wrap(msg)),
        }
    }
}

/// Backwards compatibility: plain strings become `DownloadError::Other`
impl From<String> for DownloadError {
    fn from(s: String) -> Self {
        DownloadError::Other(s)
    }
}

impl From<&str> for DownloadError {
    fn from(s: &str) -> Self {
        DownloadError::Other(s.to_string())
    }
}
