//! Process execution utilities
//!
//! Runs the external extraction tool as a subprocess, either under a hard
//! deadline (downloads) or unbounded (stream/metadata queries, where the
//! caller's ambient cancellation applies).

use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

use crate::core::error::AppError;
use crate::download::error::DownloadError;

/// Run an async Command bounded by a deadline.
///
/// On expiry the in-flight future is dropped, which kills the child process
/// (commands are spawned with `kill_on_drop`), and a `Timeout` error naming
/// the deadline is returned.
pub async fn run_with_timeout(cmd: &mut Command, deadline: Duration) -> Result<Output, AppError> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(deadline, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(AppError::Io(e)),
        Err(_) => Err(AppError::Download(DownloadError::Timeout(format!(
            "process timed out after {}s",
            deadline.as_secs()
        )))),
    }
}

/// Run an async Command with no pipeline-imposed deadline.
///
/// Used for stream-resolution and metadata queries; cancelling the calling
/// task drops the future and kills the child.
pub async fn run_unbounded(cmd: &mut Command) -> Result<Output, AppError> {
    cmd.kill_on_drop(true);
    cmd.output().await.map_err(AppError::Io)
}
