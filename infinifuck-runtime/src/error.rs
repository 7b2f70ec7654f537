//! Runtime error types for infinifuck

use infinifuck_spec::SpecError;
use thiserror::Error;

/// Malformed tape notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("Duplicate pointer marker at offset {position}")]
    DuplicatePointer { position: usize },

    #[error("Duplicate zero-index bar at offset {position}")]
    DuplicateBar { position: usize },

    #[error("Pointer marker at offset {position} must wrap exactly one value")]
    UnterminatedPointer { position: usize },

    #[error("Unexpected token {token:?} at offset {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("Cell value {value} at offset {position} does not fit in a byte")]
    ValueOutOfRange { value: String, position: usize },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] SpecError),

    #[error("Notation error: {0}")]
    NotationError(#[from] NotationError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
