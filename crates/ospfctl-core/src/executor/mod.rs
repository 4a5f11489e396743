//! Capability seam between orchestration logic and the outside world.
//!
//! Handlers never spawn processes themselves; they hand a [`CommandLine`] to an [`Executor`].
//! `ospfctl-exec` provides the process-backed implementation, [`RecordingExecutor`] a scripted one.
mod error;
pub use error::ExecutorError;

mod recording;
pub use recording::{Recorded, RecordingExecutor};

use async_trait::async_trait;
use ospfctl_model::CommandLine;

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Echo the command line and let the child write straight to our stdout/stderr.
    Inherit,
    /// Capture stdout for inspection; stderr is still inherited. No echo.
    Capture,
}

/// Result of one finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout; empty in [`OutputMode::Inherit`].
    pub stdout: String,
}

impl ExecOutcome {
    /// Successful exit with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
        }
    }

    /// Exit with `code` and no output.
    pub fn exit(code: i32) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
        }
    }

    #[inline]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one command to completion.
///
/// Implementations block (asynchronously) until the child exits and must not retry.
/// A non-zero exit is reported through [`ExecOutcome::code`], not as an error;
/// [`ExecutorError`] is reserved for failing to run the command at all.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Executor name used in logs.
    fn name(&self) -> &'static str;

    async fn execute(
        &self,
        cmd: &CommandLine,
        mode: OutputMode,
    ) -> Result<ExecOutcome, ExecutorError>;
}
