use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("working directory does not exist: {0}")]
    MissingWorkdir(PathBuf),

    #[error("working directory is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("invalid executor configuration: {0}")]
    InvalidConfig(String),
}
