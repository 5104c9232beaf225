//! Scripted mock runner for driving the pipeline without subprocesses.
//!
//! Each queued step either returns canned stdout or fails with a given
//! error; the runner records every argument vector it was invoked with so
//! tests can assert on command construction.

#![allow(dead_code)] // Not every helper is used by every test binary

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use tonearm::download::error::DownloadError;
use tonearm::download::runner::{CommandRunner, RunOutput};
use tonearm::AppError;

/// One scripted invocation outcome.
pub enum MockStep {
    /// Succeed with this stdout
    Stdout(&'static str),
    /// Fail as a yt-dlp non-zero exit with this message
    Fail(&'static str),
    /// Fail as a deadline expiry
    Timeout,
}

/// Recorded details of one invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub args: Vec<String>,
    pub deadline: Option<Duration>,
}

/// `CommandRunner` that replays scripted steps in order.
pub struct MockRunner {
    steps: Mutex<Vec<MockStep>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRunner {
    pub fn new(steps: Vec<MockStep>) -> Self {
        let mut steps = steps;
        steps.reverse(); // pop() yields them in scripted order
        Self {
            steps: Mutex::new(steps),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A runner that answers every invocation with the same stdout.
    pub fn always(stdout: &'static str) -> Self {
        Self::new((0..64).map(|_| MockStep::Stdout(stdout)).collect())
    }

    /// Every call recorded so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn run(&self, args: &[String], deadline: Option<Duration>) -> Result<RunOutput, AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            args: args.to_vec(),
            deadline,
        });

        let step = self.steps.lock().unwrap().pop();
        match step {
            Some(MockStep::Stdout(stdout)) => Ok(RunOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
            }),
            Some(MockStep::Fail(msg)) => Err(AppError::Download(DownloadError::YtDlp(msg.to_string()))),
            Some(MockStep::Timeout) => Err(AppError::Download(DownloadError::Timeout(
                "process timed out after 300s".to_string(),
            ))),
            None => Err(AppError::Download(DownloadError::Other(
                "mock runner script exhausted".to_string(),
            ))),
        }
    }
}

/// A runner succeeding with the given stdout that also drops a fake partial
/// artifact next to the requested output path before "failing", for cleanup
/// tests. Reads the `--output` value from the argument vector.
pub struct PartialWriteThenFailRunner;

#[async_trait]
impl CommandRunner for PartialWriteThenFailRunner {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn run(&self, args: &[String], _deadline: Option<Duration>) -> Result<RunOutput, AppError> {
        let output = args
            .iter()
            .position(|a| a == "--output")
            .and_then(|i| args.get(i + 1))
            .cloned()
            .unwrap_or_default();

        // Simulate the tool writing a partial file (with an extension it
        // chose) before dying mid-download.
        std::fs::write(format!("{}.opus", output), b"truncated audio").unwrap();

        Err(AppError::Download(DownloadError::YtDlp(
            "ERROR: unable to download webpage: connection reset".to_string(),
        )))
    }
}
