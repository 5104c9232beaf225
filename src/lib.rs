//! Tonearm - media resolution and retrieval engine
//!
//! Resolves a media page URL into a direct stream URL, structured metadata,
//! or a locally cached audio file by orchestrating an external yt-dlp
//! process: credential provisioning, command construction, timeout-bounded
//! execution, output parsing, and cache-file lifecycle.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, process helpers
//! - `download`: the extraction pipeline and its orchestrating engine

pub mod cli;
pub mod core;
pub mod download;

// Re-export commonly used types for convenience
pub use core::{config, AppError, AppResult};
pub use download::{find_cached_artifact, teardown_cache, CommandRunner, DownloadError, Downloader, Meta, YtdlpRunner};
