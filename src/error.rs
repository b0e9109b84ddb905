use std::path::PathBuf;
use thiserror::Error;

use crate::shape::ShapeId;

/// Bad user input for a draw command. Aborts the command only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("No shape kind selected")]
    EmptyKind,

    #[error("Unknown shape kind: {0:?}")]
    UnknownKind(String),

    #[error("No color given")]
    EmptyColor,

    #[error("Unknown color: {0:?}")]
    UnknownColor(String),

    #[error("Size must be a positive integer, got {0:?}")]
    InvalidSize(String),
}

/// Errors raised by the shape store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No shape with id {0}")]
    NotFound(ShapeId),

    #[error("Malformed shape data: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize shapes: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors surfaced to the user at the command boundary
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed shape file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for SessionError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Parse(source) => SessionError::Parse(source),
            other => SessionError::Store(other),
        }
    }
}

/// Result type for session commands
pub type SessionResult<T> = Result<T, SessionError>;
