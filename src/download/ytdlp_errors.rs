//! Classification of yt-dlp failures
//!
//! Maps extractor stderr to a coarse failure kind so logs distinguish
//! "the cookies went stale" from "the video is gone" without anyone
//! reading raw tool output.

/// Failure kinds recognized in yt-dlp stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YtDlpErrorKind {
    /// Cookies invalid, rotated, or authentication demanded
    InvalidCookies,
    /// The site refused the request as automated traffic
    BotDetection,
    /// Media is private, removed, or region-blocked
    Unavailable,
    /// Network-level failure (timeouts, connection, DNS)
    Network,
    /// Anything else
    Unknown,
}

impl YtDlpErrorKind {
    /// Classify stderr content into a failure kind
    pub fn from_stderr(stderr: &str) -> Self {
        let stderr_lower = stderr.to_lowercase();

        if stderr_lower.contains("cookies are no longer valid")
            || stderr_lower.contains("cookies have likely been rotated")
            || stderr_lower.contains("sign in to confirm you're not a bot")
            || stderr_lower.contains("please sign in")
            || stderr_lower.contains("use --cookies-from-browser")
            || stderr_lower.contains("use --cookies for the authentication")
        {
            return Self::InvalidCookies;
        }

        if stderr_lower.contains("bot detection")
            || stderr_lower.contains("http error 403")
            || stderr_lower.contains("unable to extract")
            || stderr_lower.contains("signature extraction failed")
        {
            return Self::BotDetection;
        }

        if stderr_lower.contains("private video")
            || stderr_lower.contains("video unavailable")
            || stderr_lower.contains("video is private")
            || stderr_lower.contains("video has been removed")
            || stderr_lower.contains("this video does not exist")
            || stderr_lower.contains("is not available")
        {
            return Self::Unavailable;
        }

        if stderr_lower.contains("timeout")
            || stderr_lower.contains("connection")
            || stderr_lower.contains("network")
            || stderr_lower.contains("socket")
            || stderr_lower.contains("dns")
            || stderr_lower.contains("failed to connect")
        {
            return Self::Network;
        }

        Self::Unknown
    }

    /// Short label for log lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidCookies => "invalid_cookies",
            Self::BotDetection => "bot_detection",
            Self::Unavailable => "unavailable",
            Self::Network => "network",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a retry with the same inputs could plausibly succeed.
    /// Unavailable media never comes back; stale cookies need operator action.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network | Self::Unknown)
    }
}
