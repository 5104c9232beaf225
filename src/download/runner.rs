//! Extractor invocation as an injected capability.
//!
//! The pipeline never spawns yt-dlp directly; it goes through the
//! `CommandRunner` trait, so parsing and orchestration are testable with a
//! scripted runner while production uses `YtdlpRunner`.

use crate::core::config;
use crate::core::error::AppError;
use crate::core::process::{run_unbounded, run_with_timeout};
use crate::download::error::DownloadError;
use crate::download::ytdlp_errors::YtDlpErrorKind;
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// Captured output of one extractor invocation. Transient: consumed
/// immediately by a parser, never persisted.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Raw standard-output text, verbatim
    pub stdout: String,
    /// Raw standard-error text; diagnostic only, never drives control flow
    pub stderr: String,
}

/// Trait for executing the external extraction tool.
///
/// `deadline` of `None` means no pipeline-imposed bound (the caller's
/// ambient cancellation applies); `Some` enforces a hard timeout.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Human-readable name of the tool behind this runner (e.g. "yt-dlp")
    fn name(&self) -> &str;

    /// Run one invocation and capture its output. Non-zero exit and
    /// deadline expiry are errors; callers must not treat the output of a
    /// failed run as valid.
    async fn run(&self, args: &[String], deadline: Option<Duration>) -> Result<RunOutput, AppError>;
}

/// Production runner spawning the configured yt-dlp binary.
pub struct YtdlpRunner;

impl Default for YtdlpRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl YtdlpRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for YtdlpRunner {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn run(&self, args: &[String], deadline: Option<Duration>) -> Result<RunOutput, AppError> {
        let ytdl_bin = config::YTDL_BIN.as_str();
        log::debug!("Invoking {} {}", ytdl_bin, args.join(" "));

        let mut cmd = Command::new(ytdl_bin);
        cmd.args(args);

        let output = match deadline {
            Some(deadline) => run_with_timeout(&mut cmd, deadline).await,
            None => run_unbounded(&mut cmd).await,
        }
        .map_err(|e| match e {
            // Spawn failures (binary missing) read better as a tool error
            AppError::Io(io) => AppError::Download(DownloadError::Process(format!(
                "failed to execute {}: {}",
                ytdl_bin, io
            ))),
            other => other,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let kind = YtDlpErrorKind::from_stderr(&stderr);
            let detail = stderr.lines().last().unwrap_or("no stderr output").trim();
            log::error!(
                "{} exited with {} ({}): {}",
                ytdl_bin,
                output.status,
                kind.label(),
                detail
            );
            return Err(AppError::Download(DownloadError::YtDlp(format!(
                "{} exited with {} ({}): {}",
                ytdl_bin,
                output.status,
                kind.label(),
                detail
            ))));
        }

        Ok(RunOutput { stdout, stderr })
    }
}
