//! Unicode facade and provider registry
//!
//! This crate layers the classification, case-mapping, and bidi lookup
//! surface over whatever [`TextProvider`] the embedding engine registers.
//! The facade itself is stateless: every operation is a pure function of
//! its input and the associated provider.

#![warn(missing_docs)]

pub mod error;
pub mod facade;
pub mod registry;

// Re-export key types
pub use error::{EngineError, Result};
pub use facade::UnicodeFacade;
pub use registry::{provider, set_provider};

// Re-export from core for convenience
pub use uniprop_core::{
    is_arabic_char, is_format_char, is_supported, CaseType, CharCategory, CodePoint, CodeUnit,
    CoreError, DecompositionType, Direction, ProviderBidiClass, ProviderCategory, TextProvider,
};
