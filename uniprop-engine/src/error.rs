//! Engine error types

use thiserror::Error;
use uniprop_core::CoreError;

/// Facade and registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No character-property provider is associated with the process
    #[error("no character-property provider is installed")]
    NoProvider,

    /// Output buffer smaller than the length the operation must write
    #[error("output capacity {capacity} is insufficient, {required} code units required")]
    InsufficientCapacity {
        /// Number of code units the operation needs
        required: usize,
        /// Capacity the caller actually supplied
        capacity: usize,
    },

    /// Core validation error
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
