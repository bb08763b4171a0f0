use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Character class as seen by the boundary scanner.
///
/// Every character maps to exactly one class; `Other` absorbs punctuation,
/// whitespace, symbols and anything else that is not cased or a digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Dash,
    Underscore,
    Other,
}

impl CharClass {
    /// `_` and `-` delimit words and are never copied to the output.
    pub fn is_delimiter(self) -> bool {
        matches!(self, Self::Dash | Self::Underscore)
    }
}

/// Classify a single character.
///
/// Digits are the Unicode decimal numbers (`Nd`), so `١` and `７` are digits
/// while `²` is not.
pub fn classify(ch: char) -> CharClass {
    if ch.is_lowercase() {
        CharClass::Lower
    } else if ch.is_uppercase() {
        CharClass::Upper
    } else if ch.general_category() == GeneralCategory::DecimalNumber {
        CharClass::Digit
    } else if ch == '_' {
        CharClass::Underscore
    } else if ch == '-' {
        CharClass::Dash
    } else {
        CharClass::Other
    }
}
