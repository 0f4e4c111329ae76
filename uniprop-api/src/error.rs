//! API error types

use thiserror::Error;
use uniprop_engine::EngineError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
