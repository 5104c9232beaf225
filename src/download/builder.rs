//! Builder pattern for yt-dlp invocations.
//!
//! Assembles the argument vector for a single extractor run. Pure
//! configuration assembly: no I/O, no clock; callers supply output paths
//! and templates.

use std::path::{Path, PathBuf};
use url::Url;

/// What a single extractor invocation is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Print the direct stream URL, download nothing (`--get-url`)
    StreamUrl,
    /// Dump the info JSON, download nothing; the template controls the
    /// name yt-dlp would use for any side artifacts
    Metadata { output_template: String },
    /// Fetch best-available audio to an explicit extension-less path
    Download { output_path: PathBuf },
}

/// Builder for a single yt-dlp argument vector.
///
/// # Example
///
/// ```ignore
/// let args = YtdlpArgs::download(&url, &output)
///     .cookies(cookie_path.as_deref())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct YtdlpArgs {
    url: Url,
    mode: ExtractionMode,
    cookie_path: Option<PathBuf>,
}

impl YtdlpArgs {
    /// Request direct stream-URL extraction only.
    pub fn stream_url(url: &Url) -> Self {
        Self {
            url: url.clone(),
            mode: ExtractionMode::StreamUrl,
            cookie_path: None,
        }
    }

    /// Request a structured-metadata dump without downloading.
    pub fn metadata(url: &Url, output_template: &str) -> Self {
        Self {
            url: url.clone(),
            mode: ExtractionMode::Metadata {
                output_template: output_template.to_string(),
            },
            cookie_path: None,
        }
    }

    /// Request a best-audio download to `output_path` (no extension, the
    /// tool chooses it).
    pub fn download(url: &Url, output_path: &Path) -> Self {
        Self {
            url: url.clone(),
            mode: ExtractionMode::Download {
                output_path: output_path.to_path_buf(),
            },
            cookie_path: None,
        }
    }

    /// Attach a cookie file when one was provisioned. `None` leaves the
    /// invocation unauthenticated.
    pub fn cookies(mut self, path: Option<&Path>) -> Self {
        self.cookie_path = path.map(Path::to_path_buf);
        self
    }

    /// Assemble the final argument vector.
    pub fn build(self) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();

        if let Some(ref cookie_path) = self.cookie_path {
            args.push("--cookies".to_string());
            args.push(cookie_path.to_string_lossy().into_owned());
        }

        match self.mode {
            ExtractionMode::StreamUrl => {
                args.push("--get-url".to_string());
            }
            ExtractionMode::Metadata { output_template } => {
                args.push("--dump-json".to_string());
                args.push("--skip-download".to_string());
                args.push("--output".to_string());
                args.push(output_template);
            }
            ExtractionMode::Download { output_path } => {
                args.push("--no-part".to_string());
                args.push("--no-playlist".to_string());
                args.push("--no-overwrites".to_string());
                args.push("--no-keep-video".to_string());
                args.push("--format".to_string());
                args.push("bestaudio".to_string());
                args.push("--output".to_string());
                args.push(output_path.to_string_lossy().into_owned());
            }
        }

        args.push(self.url.to_string());
        args
    }
}
