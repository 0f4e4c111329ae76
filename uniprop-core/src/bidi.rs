//! Bidirectional-class enumerations and the provider-to-public remap
//!
//! The provider's bidi ordering and the public [`Direction`] ordering are
//! independently numbered; the two are not guaranteed to match, so the
//! translation below is an explicit one-to-one match. A numeric cast here
//! would silently corrupt direction results.

/// Provider-native bidirectional class, pre-remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum ProviderBidiClass {
    /// ON: other neutrals, including OBJECT REPLACEMENT CHARACTER
    OtherNeutral = 0,
    /// L: LRM, most alphabetic, syllabic, and Han ideographic characters
    LeftToRight,
    /// R: RLM, the Hebrew alphabet and its punctuation
    RightToLeft,
    /// AN: Arabic-Indic digits, Arabic decimal and thousands separators
    ArabicNumber,
    /// EN: European digits, Eastern Arabic-Indic digits
    EuropeanNumber,
    /// AL: the Arabic, Thaana, and Syriac alphabets and their punctuation
    ArabicLetter,
    /// NSM: characters marked Mn or Me in the character database
    NonSpacingMark,
    /// CS: colon, comma, full stop, non-breaking space
    CommonSeparator,
    /// ES: plus and minus signs
    EuropeanSeparator,
    /// ET: degree sign, currency symbols
    EuropeanTerminator,
    /// BN: most formatting and control characters not typed above
    BoundaryNeutral,
    /// S: tab
    SegmentSeparator,
    /// WS: space, figure space, line separator, form feed
    Whitespace,
    /// B: paragraph separator and newline functions
    ParagraphSeparator,
    /// RLO
    RightToLeftOverride,
    /// RLE
    RightToLeftEmbedding,
    /// LRO
    LeftToRightOverride,
    /// LRE
    LeftToRightEmbedding,
    /// PDF
    PopDirectionalFormat,
}

impl ProviderBidiClass {
    /// Every bidi class a provider can return, in ordinal order.
    pub const ALL: [ProviderBidiClass; 19] = [
        ProviderBidiClass::OtherNeutral,
        ProviderBidiClass::LeftToRight,
        ProviderBidiClass::RightToLeft,
        ProviderBidiClass::ArabicNumber,
        ProviderBidiClass::EuropeanNumber,
        ProviderBidiClass::ArabicLetter,
        ProviderBidiClass::NonSpacingMark,
        ProviderBidiClass::CommonSeparator,
        ProviderBidiClass::EuropeanSeparator,
        ProviderBidiClass::EuropeanTerminator,
        ProviderBidiClass::BoundaryNeutral,
        ProviderBidiClass::SegmentSeparator,
        ProviderBidiClass::Whitespace,
        ProviderBidiClass::ParagraphSeparator,
        ProviderBidiClass::RightToLeftOverride,
        ProviderBidiClass::RightToLeftEmbedding,
        ProviderBidiClass::LeftToRightOverride,
        ProviderBidiClass::LeftToRightEmbedding,
        ProviderBidiClass::PopDirectionalFormat,
    ];
}

/// Public bidirectional category controlling text-direction resolution.
///
/// The default is [`Direction::LeftToRight`], the documented fallback for
/// anything a provider cannot classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Direction {
    /// Strong left-to-right
    #[default]
    LeftToRight = 0,
    /// Strong right-to-left
    RightToLeft,
    /// European number
    EuropeanNumber,
    /// European number separator
    EuropeanNumberSeparator,
    /// European number terminator
    EuropeanNumberTerminator,
    /// Arabic number
    ArabicNumber,
    /// Common number separator
    CommonNumberSeparator,
    /// Block (paragraph) separator
    BlockSeparator,
    /// Segment separator
    SegmentSeparator,
    /// Whitespace neutral
    WhiteSpaceNeutral,
    /// Other neutral
    OtherNeutral,
    /// LRE mark
    LeftToRightEmbedding,
    /// LRO mark
    LeftToRightOverride,
    /// Strong right-to-left Arabic
    RightToLeftArabic,
    /// RLE mark
    RightToLeftEmbedding,
    /// RLO mark
    RightToLeftOverride,
    /// PDF mark
    PopDirectionalFormat,
    /// Non-spacing mark
    NonSpacingMark,
    /// Boundary neutral
    BoundaryNeutral,
}

impl From<ProviderBidiClass> for Direction {
    fn from(bidi: ProviderBidiClass) -> Self {
        match bidi {
            ProviderBidiClass::OtherNeutral => Direction::OtherNeutral,
            ProviderBidiClass::LeftToRight => Direction::LeftToRight,
            ProviderBidiClass::RightToLeft => Direction::RightToLeft,
            ProviderBidiClass::ArabicNumber => Direction::ArabicNumber,
            ProviderBidiClass::EuropeanNumber => Direction::EuropeanNumber,
            ProviderBidiClass::ArabicLetter => Direction::RightToLeftArabic,
            ProviderBidiClass::NonSpacingMark => Direction::NonSpacingMark,
            ProviderBidiClass::CommonSeparator => Direction::CommonNumberSeparator,
            ProviderBidiClass::EuropeanSeparator => Direction::EuropeanNumberSeparator,
            ProviderBidiClass::EuropeanTerminator => Direction::EuropeanNumberTerminator,
            ProviderBidiClass::BoundaryNeutral => Direction::BoundaryNeutral,
            ProviderBidiClass::SegmentSeparator => Direction::SegmentSeparator,
            ProviderBidiClass::Whitespace => Direction::WhiteSpaceNeutral,
            ProviderBidiClass::ParagraphSeparator => Direction::BlockSeparator,
            ProviderBidiClass::RightToLeftOverride => Direction::RightToLeftOverride,
            ProviderBidiClass::RightToLeftEmbedding => Direction::RightToLeftEmbedding,
            ProviderBidiClass::LeftToRightOverride => Direction::LeftToRightOverride,
            ProviderBidiClass::LeftToRightEmbedding => Direction::LeftToRightEmbedding,
            ProviderBidiClass::PopDirectionalFormat => Direction::PopDirectionalFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_covers_all_nineteen_classes() {
        let expected = [
            (ProviderBidiClass::OtherNeutral, Direction::OtherNeutral),
            (ProviderBidiClass::LeftToRight, Direction::LeftToRight),
            (ProviderBidiClass::RightToLeft, Direction::RightToLeft),
            (ProviderBidiClass::ArabicNumber, Direction::ArabicNumber),
            (ProviderBidiClass::EuropeanNumber, Direction::EuropeanNumber),
            (ProviderBidiClass::ArabicLetter, Direction::RightToLeftArabic),
            (ProviderBidiClass::NonSpacingMark, Direction::NonSpacingMark),
            (
                ProviderBidiClass::CommonSeparator,
                Direction::CommonNumberSeparator,
            ),
            (
                ProviderBidiClass::EuropeanSeparator,
                Direction::EuropeanNumberSeparator,
            ),
            (
                ProviderBidiClass::EuropeanTerminator,
                Direction::EuropeanNumberTerminator,
            ),
            (ProviderBidiClass::BoundaryNeutral, Direction::BoundaryNeutral),
            (
                ProviderBidiClass::SegmentSeparator,
                Direction::SegmentSeparator,
            ),
            (ProviderBidiClass::Whitespace, Direction::WhiteSpaceNeutral),
            (
                ProviderBidiClass::ParagraphSeparator,
                Direction::BlockSeparator,
            ),
            (
                ProviderBidiClass::RightToLeftOverride,
                Direction::RightToLeftOverride,
            ),
            (
                ProviderBidiClass::RightToLeftEmbedding,
                Direction::RightToLeftEmbedding,
            ),
            (
                ProviderBidiClass::LeftToRightOverride,
                Direction::LeftToRightOverride,
            ),
            (
                ProviderBidiClass::LeftToRightEmbedding,
                Direction::LeftToRightEmbedding,
            ),
            (
                ProviderBidiClass::PopDirectionalFormat,
                Direction::PopDirectionalFormat,
            ),
        ];
        assert_eq!(expected.len(), ProviderBidiClass::ALL.len());
        for (input, want) in expected {
            assert_eq!(Direction::from(input), want);
        }
    }

    #[test]
    fn the_two_orderings_really_differ() {
        // Guards against anyone "simplifying" the match into a cast.
        assert_ne!(
            ProviderBidiClass::ArabicNumber as u32,
            Direction::ArabicNumber as u32
        );
        assert_ne!(
            ProviderBidiClass::Whitespace as u32,
            Direction::WhiteSpaceNeutral as u32
        );
    }

    #[test]
    fn default_direction_is_left_to_right() {
        assert_eq!(Direction::default(), Direction::LeftToRight);
    }
}
