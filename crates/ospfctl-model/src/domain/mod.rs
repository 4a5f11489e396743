mod cost;
pub use cost::Cost;

mod direction;
pub use direction::Direction;

mod command;
pub use command::CommandLine;

mod constants;
pub use constants::{CONVERGENCE_HINT_SECS, HIGH_COST, LOW_COST};
