//! Capability contract for the backing character-property service
//!
//! Concrete providers vary by host platform and backing database; the
//! engine only ever sees this trait.

use crate::bidi::ProviderBidiClass;
use crate::category::ProviderCategory;
use crate::types::{CaseType, CodeUnit};

/// Character-property capabilities any backing text service must implement.
///
/// Exactly one provider is associated with the process at a time (see the
/// engine's registry). The association is deliberately plain: no reference
/// counting beyond the handle itself, no provider stacking; whoever installs
/// a provider uninstalls it before teardown.
pub trait TextProvider: Send + Sync {
    /// Provider-native general category of `c`, pre-remap.
    fn char_category(&self, c: CodeUnit) -> ProviderCategory;

    /// Bidi-mirrored counterpart of `c`, or `c` itself when unmirrored.
    fn mirror_char(&self, c: CodeUnit) -> CodeUnit;

    /// Canonical combining class of `c` per the Unicode standard.
    fn combining_class(&self, c: CodeUnit) -> i32;

    /// Provider-native bidirectional class of `c`, pre-remap.
    fn bidi_class(&self, c: CodeUnit) -> ProviderBidiClass;

    /// Case-convert `input` into `output` under the requested transform.
    ///
    /// Returns the number of code units written, or the number required when
    /// `output` is too small. Implementations must never write past
    /// `output.len()`.
    fn convert_case(
        &self,
        input: &[CodeUnit],
        output: &mut [CodeUnit],
        case: CaseType,
    ) -> usize;
}
