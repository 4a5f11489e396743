//! Handlers behind each CLI subcommand.
//!
//! Every handler is a fixed, ordered sequence of external commands. The first command that
//! fails aborts the handler; nothing is retried or rolled back.
mod convergence;
pub use convergence::{ConvergenceReport, count_full_neighbors};

mod daemons;
mod lifecycle;
mod paths;
mod routes;

use std::sync::Arc;

use ospfctl_model::{CommandLine, Topology};
use tracing::{debug, trace};

use crate::{
    error::{CoreError, CoreResult},
    executor::{ExecOutcome, Executor, OutputMode},
};

/// Drives the emulated network through an [`Executor`].
pub struct Orchestrator {
    topology: Topology,
    executor: Arc<dyn Executor>,
}

impl Orchestrator {
    /// Validate `topology` and bind it to `executor`.
    pub fn new(topology: Topology, executor: Arc<dyn Executor>) -> CoreResult<Self> {
        topology.validate()?;
        Ok(Self { topology, executor })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Run `cmd` with inherited output; a non-zero exit becomes an error.
    async fn run(&self, cmd: CommandLine) -> CoreResult<()> {
        trace!(executor = self.executor.name(), command = %cmd, "running");

        let out = self.executor.execute(&cmd, OutputMode::Inherit).await?;
        match out.code {
            Some(0) => {
                debug!(command = %cmd, "command succeeded");
                Ok(())
            }
            Some(code) => Err(CoreError::CommandFailed {
                command: cmd.to_string(),
                code,
            }),
            None => Err(CoreError::CommandKilled {
                command: cmd.to_string(),
            }),
        }
    }

    /// Run `cmd` capturing stdout; the exit status is left to the caller.
    async fn capture(&self, cmd: CommandLine) -> CoreResult<ExecOutcome> {
        trace!(executor = self.executor.name(), command = %cmd, "capturing");
        Ok(self.executor.execute(&cmd, OutputMode::Capture).await?)
    }
}
