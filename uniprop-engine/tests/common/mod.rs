//! Deterministic test provider covering Latin, Hebrew, and Arabic ranges
//!
//! Stands in for a real backing text service: small hand-rolled tables,
//! case mapping via `char` methods restricted to 1:1 BMP mappings.

use uniprop_engine::{CaseType, CodeUnit, ProviderBidiClass, ProviderCategory, TextProvider};

pub struct BasicLatinProvider;

impl TextProvider for BasicLatinProvider {
    fn char_category(&self, c: CodeUnit) -> ProviderCategory {
        if (0xD800..=0xDFFF).contains(&c) {
            return ProviderCategory::Surrogate;
        }
        if (0xE000..=0xF8FF).contains(&c) {
            return ProviderCategory::PrivateUse;
        }
        let ch = char::from_u32(u32::from(c)).expect("non-surrogate BMP unit");
        match ch {
            '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}' => ProviderCategory::Control,
            '\u{00AD}' | '\u{200C}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{FEFF}' => {
                ProviderCategory::Format
            }
            ' ' | '\u{00A0}' | '\u{2000}'..='\u{200A}' => ProviderCategory::SpaceSeparator,
            '\u{2028}' => ProviderCategory::LineSeparator,
            '\u{2029}' => ProviderCategory::ParagraphSeparator,
            '0'..='9' | '\u{0660}'..='\u{0669}' => ProviderCategory::DecimalDigitNumber,
            '-' => ProviderCategory::DashPunctuation,
            '(' | '[' | '{' => ProviderCategory::OpenPunctuation,
            ')' | ']' | '}' => ProviderCategory::ClosePunctuation,
            '_' => ProviderCategory::ConnectorPunctuation,
            '!' | '"' | '#' | '%' | '&' | '\'' | '*' | ',' | '.' | '/' | ':' | ';' | '?'
            | '@' | '\\' => ProviderCategory::OtherPunctuation,
            '\u{00AB}' => ProviderCategory::InitialQuotePunctuation,
            '\u{00BB}' => ProviderCategory::FinalQuotePunctuation,
            '+' | '<' | '=' | '>' | '|' | '~' => ProviderCategory::MathSymbol,
            '$' | '\u{00A2}'..='\u{00A5}' => ProviderCategory::CurrencySymbol,
            '^' | '`' => ProviderCategory::ModifierSymbol,
            '\u{0300}'..='\u{036F}' => ProviderCategory::NonSpacingMark,
            _ if ch.is_uppercase() => ProviderCategory::UppercaseLetter,
            _ if ch.is_lowercase() => ProviderCategory::LowercaseLetter,
            _ if ch.is_alphabetic() => ProviderCategory::OtherLetter,
            _ => ProviderCategory::Unassigned,
        }
    }

    fn mirror_char(&self, c: CodeUnit) -> CodeUnit {
        match c {
            0x0028 => 0x0029, // ( )
            0x0029 => 0x0028,
            0x005B => 0x005D, // [ ]
            0x005D => 0x005B,
            0x007B => 0x007D, // { }
            0x007D => 0x007B,
            0x003C => 0x003E, // < >
            0x003E => 0x003C,
            other => other,
        }
    }

    fn combining_class(&self, c: CodeUnit) -> i32 {
        match c {
            0x0300..=0x0315 => 230,
            0x0316..=0x0319 => 220,
            0x0327 | 0x0328 => 202,
            _ => 0,
        }
    }

    fn bidi_class(&self, c: CodeUnit) -> ProviderBidiClass {
        let Some(ch) = char::from_u32(u32::from(c)) else {
            return ProviderBidiClass::OtherNeutral;
        };
        match ch {
            '\u{05BE}' | '\u{05D0}'..='\u{05EA}' => ProviderBidiClass::RightToLeft,
            '\u{0621}'..='\u{064A}' => ProviderBidiClass::ArabicLetter,
            '\u{0660}'..='\u{0669}' => ProviderBidiClass::ArabicNumber,
            '0'..='9' => ProviderBidiClass::EuropeanNumber,
            '+' | '-' => ProviderBidiClass::EuropeanSeparator,
            '#' | '$' | '%' | '\u{00A2}'..='\u{00A5}' | '\u{00B0}' => {
                ProviderBidiClass::EuropeanTerminator
            }
            ',' | '.' | ':' | '\u{00A0}' => ProviderBidiClass::CommonSeparator,
            '\t' => ProviderBidiClass::SegmentSeparator,
            '\n' | '\r' | '\u{2029}' => ProviderBidiClass::ParagraphSeparator,
            ' ' | '\u{000C}' | '\u{2000}'..='\u{200A}' => ProviderBidiClass::Whitespace,
            '\u{00AD}' | '\u{200B}' | '\u{FEFF}' => ProviderBidiClass::BoundaryNeutral,
            '\u{202A}' => ProviderBidiClass::LeftToRightEmbedding,
            '\u{202B}' => ProviderBidiClass::RightToLeftEmbedding,
            '\u{202C}' => ProviderBidiClass::PopDirectionalFormat,
            '\u{202D}' => ProviderBidiClass::LeftToRightOverride,
            '\u{202E}' => ProviderBidiClass::RightToLeftOverride,
            '\u{0300}'..='\u{036F}' => ProviderBidiClass::NonSpacingMark,
            _ if ch.is_alphabetic() => ProviderBidiClass::LeftToRight,
            _ => ProviderBidiClass::OtherNeutral,
        }
    }

    fn convert_case(&self, input: &[CodeUnit], output: &mut [CodeUnit], case: CaseType) -> usize {
        if output.len() < input.len() {
            return input.len();
        }
        for (out, &unit) in output.iter_mut().zip(input) {
            *out = match case {
                CaseType::None => unit,
                CaseType::Lower => map_unit(unit, lower_single),
                CaseType::Upper | CaseType::Title => map_unit(unit, upper_single),
                CaseType::Reverse => map_unit(unit, reverse_single),
            };
        }
        input.len()
    }
}

fn map_unit(unit: CodeUnit, f: impl Fn(char) -> char) -> CodeUnit {
    match char::from_u32(u32::from(unit)) {
        Some(ch) => {
            let mapped = f(ch);
            // Expansions and supplementary-plane results stay unmapped.
            if (mapped as u32) <= 0xFFFF {
                mapped as CodeUnit
            } else {
                unit
            }
        }
        None => unit,
    }
}

fn lower_single(ch: char) -> char {
    let mut it = ch.to_lowercase();
    match (it.next(), it.next()) {
        (Some(mapped), None) => mapped,
        _ => ch,
    }
}

fn upper_single(ch: char) -> char {
    let mut it = ch.to_uppercase();
    match (it.next(), it.next()) {
        (Some(mapped), None) => mapped,
        _ => ch,
    }
}

fn reverse_single(ch: char) -> char {
    if ch.is_uppercase() {
        lower_single(ch)
    } else if ch.is_lowercase() {
        upper_single(ch)
    } else {
        ch
    }
}
