//! Character classification used to pick an offset from a mapping table.

/// Classification of a single scalar for offset lookup.
///
/// Mapping tables are keyed by ASCII, so only `A-Z`, `a-z` and `0-9` get a
/// class other than [`CharClass::Other`]. Anything else (accented letters
/// that survived sanitization, other scripts, emoji) is outside every
/// variant's domain and passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

impl CharClass {
    /// Classify a scalar.
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Self::Upper
        } else if c.is_ascii_lowercase() {
            Self::Lower
        } else if c.is_ascii_digit() {
            Self::Digit
        } else {
            Self::Other
        }
    }
}

/// True for graphemes that can carry combining or enclosing marks: the
/// grapheme's base scalar is a letter or a number.
pub(super) fn is_mark_bearing(grapheme: &str) -> bool {
    grapheme
        .chars()
        .next()
        .is_some_and(|base| base.is_alphanumeric())
}

/// True for graphemes whose base scalar is a letter.
pub(super) fn is_letter(grapheme: &str) -> bool {
    grapheme
        .chars()
        .next()
        .is_some_and(|base| base.is_alphabetic())
}
