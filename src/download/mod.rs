//! Media resolution and retrieval pipeline

pub mod builder;
pub mod cache;
pub mod cookies;
pub mod downloader;
pub mod error;
pub mod metadata;
pub mod runner;
pub mod stream;
pub mod ytdlp;
pub mod ytdlp_errors;

// Re-exports for convenience
pub use builder::{ExtractionMode, YtdlpArgs};
pub use cache::{ensure_cache_dir, teardown_cache};
pub use cookies::provision_cookies;
pub use downloader::{find_cached_artifact, Downloader};
pub use error::DownloadError;
pub use metadata::Meta;
pub use runner::{CommandRunner, RunOutput, YtdlpRunner};
