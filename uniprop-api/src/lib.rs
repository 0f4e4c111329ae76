//! Public API for uniprop character-property lookup
//!
//! This crate provides the stable surface an embedding string-processing
//! engine consumes: the Unicode facade and provider registry re-exported
//! from the engine layer, plus the process-wide engine settings and the
//! teardown hook.

#![warn(missing_docs)]

pub mod error;
pub mod settings;

// Re-export key types
pub use error::{ApiError, Result};
pub use uniprop_engine::{
    is_arabic_char, is_format_char, is_supported, provider, set_provider, CaseType, CharCategory,
    CodePoint, CodeUnit, DecompositionType, Direction, EngineError, ProviderBidiClass,
    ProviderCategory, TextProvider, UnicodeFacade,
};

/// Facade over the process-wide registered provider.
///
/// Prefer constructing a [`UnicodeFacade`] once at initialization and
/// passing it down; this exists for call sites that only have the global
/// association to go on.
pub fn facade() -> Result<UnicodeFacade> {
    Ok(UnicodeFacade::from_registry()?)
}

// Convenience functions over the registered provider

/// Classify `c` using the registered provider.
pub fn category(c: CodePoint) -> Result<CharCategory> {
    Ok(facade()?.category(c))
}

/// Resolved direction of `c` using the registered provider.
pub fn direction(c: CodePoint) -> Result<Direction> {
    Ok(facade()?.direction(c))
}

/// Lower-case `c` using the registered provider.
pub fn to_lower(c: CodePoint) -> Result<CodePoint> {
    Ok(facade()?.to_lower(c))
}

/// Upper-case `c` using the registered provider.
pub fn to_upper(c: CodePoint) -> Result<CodePoint> {
    Ok(facade()?.to_upper(c))
}

/// Fold `c` for case-insensitive comparison using the registered provider.
pub fn fold_case(c: CodePoint) -> Result<CodePoint> {
    Ok(facade()?.fold_case(c))
}
