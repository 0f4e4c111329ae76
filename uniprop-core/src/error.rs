//! Core error types (deterministic only)

use crate::types::CodePoint;
use thiserror::Error;

/// Core validation errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Code point beyond the Basic Multilingual Plane
    #[error("code point U+{code_point:08X} is outside the supported range (<= U+FFFF)")]
    UnsupportedCodePoint {
        /// The offending code point
        code_point: CodePoint,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
