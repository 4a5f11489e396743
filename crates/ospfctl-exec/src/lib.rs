//! Process-backed [`ospfctl_core::Executor`].
//!
//! Spawns each command with `tokio::process::Command`, one at a time, and waits for it without
//! a timeout.
mod error;
pub use error::ExecError;

mod process;
pub use process::{ProcessConfig, ProcessExecutor};
