//! Stateless translation layer over the associated provider
//!
//! Calls flow provider-ward, get their enumerations remapped into the
//! public space, and come straight back. The facade never blocks, retries,
//! or retains a caller buffer past the call; all latency is whatever the
//! provider incurs.

use std::sync::Arc;

use uniprop_core::{
    is_supported, CaseType, CharCategory, CodePoint, CodeUnit, DecompositionType, Direction,
    ProviderCategory, TextProvider,
};

use crate::error::{EngineError, Result};
use crate::registry;

/// Character-property lookup over an injected provider handle.
///
/// Construct one per component that needs classification and pass it down;
/// [`UnicodeFacade::from_registry`] exists for call sites that only have
/// the process-wide association to go on.
#[derive(Clone)]
pub struct UnicodeFacade {
    provider: Arc<dyn TextProvider>,
}

impl UnicodeFacade {
    /// Create a facade over `provider`.
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Create a facade over the process-wide registered provider.
    ///
    /// Fails fast with [`EngineError::NoProvider`] when none is installed;
    /// classifying without a configured provider is a setup error, not
    /// something to limp through.
    pub fn from_registry() -> Result<Self> {
        registry::provider()
            .map(Self::new)
            .ok_or(EngineError::NoProvider)
    }

    // --- Case mapping ---

    /// Fold `c` for case-insensitive comparison.
    ///
    /// Defined as lower-casing; full fold-case tables are out of scope and
    /// the approximation holds for most of Unicode.
    pub fn fold_case(&self, c: CodePoint) -> CodePoint {
        self.to_lower(c)
    }

    /// Fold `src` element-wise into `dst`.
    ///
    /// Capacity is checked strictly before any write: an undersized `dst`
    /// yields [`EngineError::InsufficientCapacity`] carrying the required
    /// length, with `dst` untouched. On success every output position holds
    /// the fold of the corresponding input and `src.len()` is returned.
    pub fn fold_case_into(&self, src: &[CodeUnit], dst: &mut [CodeUnit]) -> Result<usize> {
        check_capacity(src.len(), dst.len())?;
        for (out, &unit) in dst.iter_mut().zip(src) {
            *out = self.fold_case(CodePoint::from(unit)) as CodeUnit;
        }
        Ok(src.len())
    }

    /// Lower-case a single code point.
    pub fn to_lower(&self, c: CodePoint) -> CodePoint {
        self.convert_single(c, CaseType::Lower)
    }

    /// Lower-case `src` into `dst`.
    ///
    /// Same capacity policy as [`UnicodeFacade::fold_case_into`]; on success
    /// returns the provider-reported output length.
    pub fn to_lower_into(&self, src: &[CodeUnit], dst: &mut [CodeUnit]) -> Result<usize> {
        check_capacity(src.len(), dst.len())?;
        Ok(self.provider.convert_case(src, dst, CaseType::Lower))
    }

    /// Upper-case a single code point.
    pub fn to_upper(&self, c: CodePoint) -> CodePoint {
        self.convert_single(c, CaseType::Upper)
    }

    /// Upper-case `src` into `dst`.
    ///
    /// Same capacity policy as [`UnicodeFacade::fold_case_into`]; on success
    /// returns the provider-reported output length.
    pub fn to_upper_into(&self, src: &[CodeUnit], dst: &mut [CodeUnit]) -> Result<usize> {
        check_capacity(src.len(), dst.len())?;
        Ok(self.provider.convert_case(src, dst, CaseType::Upper))
    }

    /// Title-case a single code point.
    ///
    /// Approximated as upper-casing, a known inaccuracy: providers implement
    /// no compound title forms. U+01F3 "dz" upper-cases to U+01F1 "DZ" but
    /// should title-case to U+01F2 "Dz"; this returns the former.
    pub fn to_title_case(&self, c: CodePoint) -> CodePoint {
        self.to_upper(c)
    }

    /// Case-insensitive comparison of `len` code units from each buffer.
    ///
    /// Folds each pair and returns the signed difference of the first
    /// mismatch, or 0 when all `len` positions match.
    pub fn umemcasecmp(&self, a: &[CodeUnit], b: &[CodeUnit], len: usize) -> i32 {
        debug_assert!(len <= a.len() && len <= b.len());
        for i in 0..len {
            let c1 = self.fold_case(CodePoint::from(a[i]));
            let c2 = self.fold_case(CodePoint::from(b[i]));
            if c1 != c2 {
                return c1 as i32 - c2 as i32;
            }
        }
        0
    }

    // --- Classification ---

    /// Public general category of `c`, remapped from the provider-native
    /// enumeration through the explicit translation table.
    pub fn category(&self, c: CodePoint) -> CharCategory {
        CharCategory::from(self.provider_category(c))
    }

    /// Space-separator test (category Zs).
    pub fn is_separator_space(&self, c: CodePoint) -> bool {
        self.provider_category(c) == ProviderCategory::SpaceSeparator
    }

    /// Decimal-digit test (category Nd).
    pub fn is_digit(&self, c: CodePoint) -> bool {
        self.provider_category(c) == ProviderCategory::DecimalDigitNumber
    }

    /// Punctuation test over the union of the seven punctuation categories.
    pub fn is_punct(&self, c: CodePoint) -> bool {
        self.category(c).intersects(CharCategory::PUNCTUATION)
    }

    /// Lowercase-letter test (category Ll).
    pub fn is_lower(&self, c: CodePoint) -> bool {
        self.provider_category(c) == ProviderCategory::LowercaseLetter
    }

    /// Printability heuristic.
    ///
    /// The provider enumerates all non-printable categories first, so
    /// anything at or past `Surrogate` in its ordering prints. This is a
    /// documented ordering assumption, not a portable Unicode rule.
    pub fn is_printable_char(&self, c: CodePoint) -> bool {
        self.provider_category(c).ordinal() >= ProviderCategory::Surrogate.ordinal()
    }

    // --- Bidi, combining, decomposition ---

    /// Bidi-mirrored counterpart of `c`, or `c` itself when unmirrored.
    pub fn mirrored_char(&self, c: CodePoint) -> CodePoint {
        debug_assert!(is_supported(c), "unsupported code point U+{c:08X}");
        CodePoint::from(self.provider.mirror_char(c as CodeUnit))
    }

    /// Resolved direction of `c`.
    ///
    /// Remapped case by case from the provider's bidi ordering; the two
    /// enumerations are numbered independently.
    pub fn direction(&self, c: CodePoint) -> Direction {
        Direction::from(self.provider.bidi_class(c as CodeUnit))
    }

    /// Canonical combining class of `c`.
    pub fn combining_class(&self, c: CodePoint) -> u8 {
        self.provider.combining_class(c as CodeUnit) as u8
    }

    /// Decomposition lookup is a declared non-goal; always
    /// [`DecompositionType::None`].
    ///
    /// Callers in scope only probe for Font/Compat forms, and the characters
    /// carrying those are unusual enough that the constant answer holds up.
    pub fn decomposition_type(&self, _c: CodePoint) -> DecompositionType {
        DecompositionType::None
    }

    /// Digit value of `c` within its digit row.
    ///
    /// Relies on digit rows starting on an 0x10 boundary, which holds for
    /// the Western, Arabic, Thai, Lao, Tibetan, and Fullwidth rows.
    pub fn digit_value(&self, c: CodePoint) -> i32 {
        (c % 0x10) as i32
    }

    /// Complex line-breaking context (Thai, Khmer, ...) is not implemented;
    /// always false. Accurate results require extending the provider
    /// contract, not this facade.
    pub fn has_line_breaking_property_complex_context(&self, _c: CodePoint) -> bool {
        false
    }

    /// See [`UnicodeFacade::has_line_breaking_property_complex_context`];
    /// always false.
    pub fn has_line_breaking_property_complex_context_or_ideographic(
        &self,
        _c: CodePoint,
    ) -> bool {
        false
    }

    fn provider_category(&self, c: CodePoint) -> ProviderCategory {
        debug_assert!(is_supported(c), "unsupported code point U+{c:08X}");
        self.provider.char_category(c as CodeUnit)
    }

    fn convert_single(&self, c: CodePoint, case: CaseType) -> CodePoint {
        debug_assert!(is_supported(c), "unsupported code point U+{c:08X}");
        let input = [c as CodeUnit];
        let mut output = [0 as CodeUnit];
        self.provider.convert_case(&input, &mut output, case);
        CodePoint::from(output[0])
    }
}

impl std::fmt::Debug for UnicodeFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnicodeFacade").finish_non_exhaustive()
    }
}

fn check_capacity(required: usize, capacity: usize) -> Result<()> {
    if capacity < required {
        log::debug!("batch case conversion rejected: capacity {capacity} < required {required}");
        return Err(EngineError::InsufficientCapacity { required, capacity });
    }
    Ok(())
}
