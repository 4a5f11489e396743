//! Logging setup for `ospfctl`.
//!
//! Logs are written to stderr so stdout stays reserved for command echoes and operator messages.
mod config;
pub use config::LoggerConfig;

mod error;
pub use error::{LoggerError, LoggerResult};

mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod timestamp;
pub use timestamp::{LoggerRfc3339, LoggerTimeZone, init_local_offset};

mod init;
pub use init::init_logger;
