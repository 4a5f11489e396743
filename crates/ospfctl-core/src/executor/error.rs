use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("failed to spawn '{program}': {reason}")]
    Spawn { program: String, reason: String },

    #[error("failed to wait for '{program}': {reason}")]
    Wait { program: String, reason: String },
}
