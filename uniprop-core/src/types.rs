//! Code-point conventions and case/decomposition selectors

use crate::error::CoreError;

/// A single Unicode code point.
///
/// Only the Basic Multilingual Plane is supported; callers must pre-reject
/// or pre-clamp supplementary-plane values. No surrogate-pair decoding is
/// performed anywhere in this workspace.
pub type CodePoint = u32;

/// A UTF-16 code unit, the element type of all batch buffers.
pub type CodeUnit = u16;

/// Diagnostic sentinel accepted alongside BMP code points.
///
/// Callers sometimes pass -1 as "no character"; accepting the sentinel keeps
/// assertion messages meaningful instead of tripping on the cast.
pub const INVALID_CODE_POINT: CodePoint = 0xFFFF_FFFF;

/// Highest supported code point (end of the Basic Multilingual Plane).
pub const MAX_SUPPORTED: CodePoint = 0xFFFF;

/// Whether `c` is within the supported range or is the diagnostic sentinel.
#[inline]
pub fn is_supported(c: CodePoint) -> bool {
    c <= MAX_SUPPORTED || c == INVALID_CODE_POINT
}

/// Validate `c` against the supported range, for callers that want a
/// recoverable error instead of the debug-only assertions used internally.
#[inline]
pub fn validate(c: CodePoint) -> Result<CodePoint, CoreError> {
    if is_supported(c) {
        Ok(c)
    } else {
        Err(CoreError::UnsupportedCodePoint { code_point: c })
    }
}

/// Case-conversion transform requested of the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseType {
    /// No case transform
    #[default]
    None,
    /// Lower case
    Lower,
    /// Upper case
    Upper,
    /// Title case, for languages whose compound characters combine an upper
    /// and a lower letter (such as Dz)
    Title,
    /// Reverse of the current case; useful for flipping sort order between
    /// upper- and lower-case strings
    Reverse,
}

/// Decomposition classification of a code point.
///
/// The facade hard-codes [`DecompositionType::None`] for every input;
/// the full enumeration exists to satisfy the richer interface contract
/// callers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecompositionType {
    /// No decomposition
    #[default]
    None,
    /// Canonical decomposition
    Canonical,
    /// Compatibility decomposition
    Compat,
    /// Encircled form
    Circle,
    /// Final presentation form (Arabic)
    Final,
    /// Font variant
    Font,
    /// Vulgar fraction form
    Fraction,
    /// Initial presentation form (Arabic)
    Initial,
    /// Isolated presentation form (Arabic)
    Isolated,
    /// Medial presentation form (Arabic)
    Medial,
    /// Narrow compatibility variant
    Narrow,
    /// No-break version of a space or hyphen
    NoBreak,
    /// Small variant form
    Small,
    /// CJK squared-font variant
    Square,
    /// Subscript form
    Sub,
    /// Superscript form
    Super,
    /// Vertical-layout presentation form
    Vertical,
    /// Wide compatibility variant
    Wide,
}
