mod domain;
pub use domain::{CONVERGENCE_HINT_SECS, HIGH_COST, LOW_COST};
pub use domain::{CommandLine, Cost, Direction};

mod error;
pub use error::{ModelError, ModelResult};

mod topology;
pub use topology::{ConvergenceConfig, CostAssignment, DaemonCommands, HostRoute, Topology};
