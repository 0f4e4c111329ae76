//! Core types for pluggable Unicode character-property lookup
//!
//! This crate defines the value types shared between a string-processing
//! engine and its externally supplied character-property provider: code-point
//! conventions, the provider capability contract, the public enumerations,
//! and the explicit translation tables between the provider-native and
//! public enumeration spaces. No Unicode character database is bundled;
//! everything that needs real property data goes through the provider.

#![warn(missing_docs)]

pub mod bidi;
pub mod category;
pub mod error;
pub mod provider;
pub mod ranges;
pub mod types;

// Re-export key types
pub use bidi::{Direction, ProviderBidiClass};
pub use category::{CharCategory, ProviderCategory};
pub use error::CoreError;
pub use provider::TextProvider;
pub use ranges::{is_arabic_char, is_format_char};
pub use types::{
    is_supported, validate, CaseType, CodePoint, CodeUnit, DecompositionType, INVALID_CODE_POINT,
    MAX_SUPPORTED,
};
