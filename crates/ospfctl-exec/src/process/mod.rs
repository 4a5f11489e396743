mod config;
pub use config::ProcessConfig;

mod executor;
pub use executor::ProcessExecutor;
