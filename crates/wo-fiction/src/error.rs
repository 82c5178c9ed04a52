//! Error types for the fiction engine.

use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during a session.
///
/// Gameplay setbacks are never errors; they come back as narration.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Input that does not parse to any command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The mobile stands in, or is headed for, a room the world lacks.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// World loading or assembly failed.
    #[error(transparent)]
    Core(#[from] wo_core::WoError),
}
