use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid OSPF cost: {0} (expected 1..=65535)")]
    InvalidCost(u32),

    #[error("unknown path direction: {0} (expected north|south)")]
    UnknownDirection(String),

    #[error("path table for '{0}' is missing or empty")]
    EmptyPath(String),

    #[error("router '{router}' is used by the '{direction}' path but is not listed in routers")]
    UnknownRouter { direction: String, router: String },

    #[error("duplicate cost assignment for {router}/{interface} in the '{direction}' path")]
    DuplicateAssignment {
        direction: String,
        router: String,
        interface: String,
    },

    #[error("invalid topology: {0}")]
    Invalid(String),

    #[error("failed to parse topology: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
