use std::time::Duration;

use ospfctl_model::ModelError;
use thiserror::Error;

use crate::executor::ExecutorError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("command exited with code {code}: {command}")]
    CommandFailed { command: String, code: i32 },

    #[error("command terminated by signal: {command}")]
    CommandKilled { command: String },

    #[error("router '{router}' has {full}/{expected} full OSPF adjacencies after {waited:?}")]
    NotConverged {
        router: String,
        full: usize,
        expected: usize,
        waited: Duration,
    },

    #[error("executor error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("topology error: {0}")]
    Topology(#[from] ModelError),
}

impl CoreError {
    /// Process exit status to report for this error.
    ///
    /// A failed external command propagates its own code when it fits a process
    /// status; everything else maps to `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            CoreError::CommandFailed { code, .. } => match u8::try_from(*code) {
                Ok(c) if c != 0 => c,
                _ => 1,
            },
            _ => 1,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
