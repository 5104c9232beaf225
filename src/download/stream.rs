//! Stream-URL extraction from raw yt-dlp output.

use crate::download::error::DownloadError;

/// Pick the playable URL out of extractor output.
///
/// yt-dlp interleaves warnings with the URL line, so the scan runs from the
/// last line toward the first and takes the first trimmed line starting
/// with `http`; the last-produced line is the authoritative one.
pub fn extract_stream_url(stdout: &str) -> Result<String, DownloadError> {
    for line in stdout.lines().rev() {
        let line = line.trim();
        if line.starts_with("http") {
            return Ok(line.to_string());
        }
    }

    Err(DownloadError::NoStreamUrl(
        "no valid URL found in extractor output".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_url_after_warnings() {
        let stdout = "WARNING: foo\nhttps://cdn.example.com/stream.m3u8\n";
        assert_eq!(
            extract_stream_url(stdout).unwrap(),
            "https://cdn.example.com/stream.m3u8"
        );
    }

    #[test]
    fn test_returns_last_url_line() {
        let stdout = "https://cdn.example.com/first.m3u8\nWARNING: retrying\nhttps://cdn.example.com/second.m3u8\n";
        assert_eq!(
            extract_stream_url(stdout).unwrap(),
            "https://cdn.example.com/second.m3u8"
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let stdout = "  https://cdn.example.com/stream.m3u8  \n";
        assert_eq!(
            extract_stream_url(stdout).unwrap(),
            "https://cdn.example.com/stream.m3u8"
        );
    }

    #[test]
    fn test_empty_output_fails() {
        let err = extract_stream_url("").unwrap_err();
        assert!(matches!(err, DownloadError::NoStreamUrl(_)));
    }

    #[test]
    fn test_output_without_url_fails() {
        let err = extract_stream_url("WARNING: nothing here\nERROR: also nothing\n").unwrap_err();
        assert!(matches!(err, DownloadError::NoStreamUrl(_)));
    }

    #[test]
    fn test_mid_line_url_is_not_a_match() {
        // The prefix check is anchored at line start after trimming
        let err = extract_stream_url("see https://example.com for details\n").unwrap_err();
        assert!(matches!(err, DownloadError::NoStreamUrl(_)));
    }
}
