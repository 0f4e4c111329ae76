//! General-category enumerations and the provider-to-public remap
//!
//! The provider's category ordering and the public bit-flag space are
//! independently defined. Translation is an explicit match over the closed
//! provider enumeration, never a numeric cast; adding a provider category
//! requires updating the mapping, and the compiler enforces that.

use bitflags::bitflags;

/// Provider-native general category, pre-remap.
///
/// Discriminants are fixed to the backing text service's ordering and must
/// stay in sync with it. The ordering is load-bearing in one place: the
/// provider enumerates all non-printable categories before [`Surrogate`],
/// and the printability heuristic compares ordinals against that boundary.
///
/// [`Surrogate`]: ProviderCategory::Surrogate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum ProviderCategory {
    /// Cn: unassigned and non-character code points
    Unassigned = 0,
    /// Cc
    Control = 1,
    /// Cf
    Format = 2,
    /// Co
    PrivateUse = 3,
    /// Cs
    Surrogate = 4,
    /// Lu
    UppercaseLetter = 5,
    /// Ll
    LowercaseLetter = 6,
    /// Lt
    TitlecaseLetter = 7,
    /// Lm
    ModifierLetter = 8,
    /// Lo
    OtherLetter = 9,
    /// Mn
    NonSpacingMark = 10,
    /// Me
    EnclosingMark = 11,
    /// Mc
    SpacingCombiningMark = 12,
    /// Nd
    DecimalDigitNumber = 13,
    /// Nl
    LetterNumber = 14,
    /// No
    OtherNumber = 15,
    /// Zs
    SpaceSeparator = 16,
    /// Zl
    LineSeparator = 17,
    /// Zp
    ParagraphSeparator = 18,
    /// Pd
    DashPunctuation = 19,
    /// Ps
    OpenPunctuation = 20,
    /// Pe
    ClosePunctuation = 21,
    /// Pc
    ConnectorPunctuation = 22,
    /// Po
    OtherPunctuation = 23,
    /// Pi
    InitialQuotePunctuation = 24,
    /// Pf
    FinalQuotePunctuation = 25,
    /// Sm
    MathSymbol = 26,
    /// Sc
    CurrencySymbol = 27,
    /// Sk
    ModifierSymbol = 28,
    /// So
    OtherSymbol = 29,
}

impl ProviderCategory {
    /// Every category a provider can return, in ordinal order.
    pub const ALL: [ProviderCategory; 30] = [
        ProviderCategory::Unassigned,
        ProviderCategory::Control,
        ProviderCategory::Format,
        ProviderCategory::PrivateUse,
        ProviderCategory::Surrogate,
        ProviderCategory::UppercaseLetter,
        ProviderCategory::LowercaseLetter,
        ProviderCategory::TitlecaseLetter,
        ProviderCategory::ModifierLetter,
        ProviderCategory::OtherLetter,
        ProviderCategory::NonSpacingMark,
        ProviderCategory::EnclosingMark,
        ProviderCategory::SpacingCombiningMark,
        ProviderCategory::DecimalDigitNumber,
        ProviderCategory::LetterNumber,
        ProviderCategory::OtherNumber,
        ProviderCategory::SpaceSeparator,
        ProviderCategory::LineSeparator,
        ProviderCategory::ParagraphSeparator,
        ProviderCategory::DashPunctuation,
        ProviderCategory::OpenPunctuation,
        ProviderCategory::ClosePunctuation,
        ProviderCategory::ConnectorPunctuation,
        ProviderCategory::OtherPunctuation,
        ProviderCategory::InitialQuotePunctuation,
        ProviderCategory::FinalQuotePunctuation,
        ProviderCategory::MathSymbol,
        ProviderCategory::CurrencySymbol,
        ProviderCategory::ModifierSymbol,
        ProviderCategory::OtherSymbol,
    ];

    /// Position of this category in the provider's ordering.
    #[inline]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }
}

bitflags! {
    /// Public general category as independent bit flags.
    ///
    /// Each category occupies a distinct bit so category-set membership
    /// composes as a single bitwise AND against a mask, which is how string
    /// call sites usually phrase their predicates. The empty set means
    /// "no category".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CharCategory: u32 {
        /// Cn: unassigned and non-character code points
        const OTHER_NOT_ASSIGNED = 1 << 0;
        /// Cc
        const OTHER_CONTROL = 1 << 1;
        /// Cf
        const OTHER_FORMAT = 1 << 2;
        /// Co
        const OTHER_PRIVATE_USE = 1 << 3;
        /// Cs
        const OTHER_SURROGATE = 1 << 4;
        /// Lu
        const LETTER_UPPERCASE = 1 << 5;
        /// Ll
        const LETTER_LOWERCASE = 1 << 6;
        /// Lt
        const LETTER_TITLECASE = 1 << 7;
        /// Lm
        const LETTER_MODIFIER = 1 << 8;
        /// Lo
        const LETTER_OTHER = 1 << 9;
        /// Mn
        const MARK_NON_SPACING = 1 << 10;
        /// Me
        const MARK_ENCLOSING = 1 << 11;
        /// Mc
        const MARK_SPACING_COMBINING = 1 << 12;
        /// Nd
        const NUMBER_DECIMAL_DIGIT = 1 << 13;
        /// Nl
        const NUMBER_LETTER = 1 << 14;
        /// No
        const NUMBER_OTHER = 1 << 15;
        /// Zs
        const SEPARATOR_SPACE = 1 << 16;
        /// Zl
        const SEPARATOR_LINE = 1 << 17;
        /// Zp
        const SEPARATOR_PARAGRAPH = 1 << 18;
        /// Pd
        const PUNCTUATION_DASH = 1 << 19;
        /// Ps
        const PUNCTUATION_OPEN = 1 << 20;
        /// Pe
        const PUNCTUATION_CLOSE = 1 << 21;
        /// Pc
        const PUNCTUATION_CONNECTOR = 1 << 22;
        /// Po
        const PUNCTUATION_OTHER = 1 << 23;
        /// Pi
        const PUNCTUATION_INITIAL_QUOTE = 1 << 24;
        /// Pf
        const PUNCTUATION_FINAL_QUOTE = 1 << 25;
        /// Sm
        const SYMBOL_MATH = 1 << 26;
        /// Sc
        const SYMBOL_CURRENCY = 1 << 27;
        /// Sk
        const SYMBOL_MODIFIER = 1 << 28;
        /// So
        const SYMBOL_OTHER = 1 << 29;

        /// Union of the seven punctuation categories.
        const PUNCTUATION = Self::PUNCTUATION_DASH.bits()
            | Self::PUNCTUATION_OPEN.bits()
            | Self::PUNCTUATION_CLOSE.bits()
            | Self::PUNCTUATION_CONNECTOR.bits()
            | Self::PUNCTUATION_OTHER.bits()
            | Self::PUNCTUATION_INITIAL_QUOTE.bits()
            | Self::PUNCTUATION_FINAL_QUOTE.bits();
    }
}

impl From<ProviderCategory> for CharCategory {
    fn from(cc: ProviderCategory) -> Self {
        match cc {
            ProviderCategory::Unassigned => CharCategory::OTHER_NOT_ASSIGNED,
            ProviderCategory::Control => CharCategory::OTHER_CONTROL,
            ProviderCategory::Format => CharCategory::OTHER_FORMAT,
            ProviderCategory::PrivateUse => CharCategory::OTHER_PRIVATE_USE,
            ProviderCategory::Surrogate => CharCategory::OTHER_SURROGATE,

            ProviderCategory::UppercaseLetter => CharCategory::LETTER_UPPERCASE,
            ProviderCategory::LowercaseLetter => CharCategory::LETTER_LOWERCASE,
            ProviderCategory::TitlecaseLetter => CharCategory::LETTER_TITLECASE,
            ProviderCategory::ModifierLetter => CharCategory::LETTER_MODIFIER,
            ProviderCategory::OtherLetter => CharCategory::LETTER_OTHER,

            ProviderCategory::NonSpacingMark => CharCategory::MARK_NON_SPACING,
            ProviderCategory::EnclosingMark => CharCategory::MARK_ENCLOSING,
            ProviderCategory::SpacingCombiningMark => CharCategory::MARK_SPACING_COMBINING,

            ProviderCategory::DecimalDigitNumber => CharCategory::NUMBER_DECIMAL_DIGIT,
            ProviderCategory::LetterNumber => CharCategory::NUMBER_LETTER,
            ProviderCategory::OtherNumber => CharCategory::NUMBER_OTHER,

            ProviderCategory::SpaceSeparator => CharCategory::SEPARATOR_SPACE,
            ProviderCategory::LineSeparator => CharCategory::SEPARATOR_LINE,
            ProviderCategory::ParagraphSeparator => CharCategory::SEPARATOR_PARAGRAPH,

            ProviderCategory::DashPunctuation => CharCategory::PUNCTUATION_DASH,
            ProviderCategory::OpenPunctuation => CharCategory::PUNCTUATION_OPEN,
            ProviderCategory::ClosePunctuation => CharCategory::PUNCTUATION_CLOSE,
            ProviderCategory::ConnectorPunctuation => CharCategory::PUNCTUATION_CONNECTOR,
            ProviderCategory::OtherPunctuation => CharCategory::PUNCTUATION_OTHER,
            ProviderCategory::InitialQuotePunctuation => CharCategory::PUNCTUATION_INITIAL_QUOTE,
            ProviderCategory::FinalQuotePunctuation => CharCategory::PUNCTUATION_FINAL_QUOTE,

            ProviderCategory::MathSymbol => CharCategory::SYMBOL_MATH,
            ProviderCategory::CurrencySymbol => CharCategory::SYMBOL_CURRENCY,
            ProviderCategory::ModifierSymbol => CharCategory::SYMBOL_MODIFIER,
            ProviderCategory::OtherSymbol => CharCategory::SYMBOL_OTHER,
        }
    }
}
