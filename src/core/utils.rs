//! Small shared helpers: wall-clock tokens and unique output naming.

use chrono::Local;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide sequence for download output names. Two downloads started
/// within the same clock second would otherwise derive the same path.
static DOWNLOAD_SEQ: AtomicU64 = AtomicU64::new(0);

/// Current local wall-clock time as a second-resolution token, `YYYYMMDD_HHMMSS`.
pub fn timestamp_token() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Timestamp token with a monotonic suffix, unique for the process lifetime.
///
/// The second-resolution prefix keeps output names sortable by start time;
/// the counter removes same-second collisions between concurrent downloads.
pub fn unique_download_token() -> String {
    let seq = DOWNLOAD_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}_{:04}", timestamp_token(), seq)
}
