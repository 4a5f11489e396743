pub mod commands;
pub mod error;
pub mod executor;
pub mod orchestrator;

pub use error::{CoreError, CoreResult};
pub use executor::{ExecOutcome, Executor, ExecutorError, OutputMode, RecordingExecutor};
pub use orchestrator::{ConvergenceReport, Orchestrator};

pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::executor::{ExecOutcome, Executor, ExecutorError, OutputMode};
    pub use crate::orchestrator::Orchestrator;
}
