//! Structured metadata parsing from yt-dlp JSON dumps.

use serde::{Deserialize, Serialize};

use crate::download::error::DownloadError;

/// Structured metadata for one media item, parsed from the extractor's
/// info-JSON dump. Fields the dump omits default to empty/zero, since
/// yt-dlp emits different field sets per site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Media title
    #[serde(default)]
    pub title: String,
    /// Duration in seconds; float because some extractors report fractions
    #[serde(default)]
    pub duration: f64,
    /// Uploader or channel name
    #[serde(default)]
    pub uploader: String,
    /// Canonical page URL as reported by the extractor
    #[serde(default)]
    pub webpage_url: String,
    /// Origin tag naming the tool that produced this record. Stamped by the
    /// fetcher after parsing; any value in the JSON itself is discarded.
    #[serde(skip_deserializing)]
    pub parser: String,
}

/// Parse one info-JSON document into a `Meta`.
///
/// Malformed output is fatal to the request; there is no degraded metadata.
pub fn parse_meta(stdout: &str) -> Result<Meta, DownloadError> {
    serde_json::from_str(stdout.trim())
        .map_err(|e| DownloadError::Metadata(format!("failed to parse extractor metadata: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_document() {
        let meta = parse_meta(r#"{"title":"Song","duration":120}"#).unwrap();
        assert_eq!(meta.title, "Song");
        assert_eq!(meta.duration, 120.0);
        assert_eq!(meta.uploader, "");
        assert_eq!(meta.parser, "");
    }

    #[test]
    fn test_parse_full_document_ignores_unknown_fields() {
        let json = r#"{
            "title": "Song",
            "duration": 215.5,
            "uploader": "Some Channel",
            "webpage_url": "https://example.com/watch?id=1",
            "view_count": 123456,
            "formats": [{"format_id": "251"}]
        }"#;
        let meta = parse_meta(json).unwrap();
        assert_eq!(meta.title, "Song");
        assert_eq!(meta.duration, 215.5);
        assert_eq!(meta.uploader, "Some Channel");
        assert_eq!(meta.webpage_url, "https://example.com/watch?id=1");
    }

    #[test]
    fn test_parser_field_in_json_is_discarded() {
        let meta = parse_meta(r#"{"title":"Song","parser":"spoofed"}"#).unwrap();
        assert_eq!(meta.parser, "");
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let err = parse_meta("WARNING: not json at all").unwrap_err();
        assert!(matches!(err, DownloadError::Metadata(_)));
    }

    #[test]
    fn test_empty_output_is_fatal() {
        assert!(parse_meta("").is_err());
    }
}
