//! Offset tables: the signed distance from an ASCII scalar to its stylized
//! counterpart in the target Unicode block.

use super::classify::CharClass;

// Enclosed Alphanumerics / Halfwidth and Fullwidth Forms
pub(super) const FULL_WIDTH: i32 = 65248;
pub(super) const CIRCLE_UPPER: i32 = 9333;
pub(super) const CIRCLE_LOWER: i32 = 9327;
pub(super) const CIRCLE_DIGIT: i32 = 9263;
pub(super) const PAREN_UPPER: i32 = 9307;
pub(super) const PAREN_LOWER: i32 = 9275;
pub(super) const PAREN_DIGIT: i32 = 9283;

// Enclosed Alphanumeric Supplement
pub(super) const SQUARED_UPPER: i32 = 127215;
pub(super) const SQUARED_LOWER: i32 = 127183;
pub(super) const NEGATIVE_SQUARED_UPPER: i32 = 127279;
pub(super) const NEGATIVE_SQUARED_LOWER: i32 = 127247;

// Mathematical Alphanumeric Symbols
pub(super) const MONOSPACE_UPPER: i32 = 120367;
pub(super) const MONOSPACE_LOWER: i32 = 120361;
pub(super) const MONOSPACE_DIGIT: i32 = 120774;
pub(super) const SCRIPT_UPPER: i32 = 119951;
pub(super) const SCRIPT_LOWER: i32 = 119945;
pub(super) const BOLD_SERIF_UPPER: i32 = 119743;
pub(super) const BOLD_SERIF_LOWER: i32 = 119737;
pub(super) const BOLD_SERIF_DIGIT: i32 = 120734;
pub(super) const BOLD_SANS_UPPER: i32 = 120211;
pub(super) const BOLD_SANS_LOWER: i32 = 120205;
pub(super) const BOLD_SANS_DIGIT: i32 = 120764;
pub(super) const ITALIC_SERIF_UPPER: i32 = 119795;
pub(super) const ITALIC_SERIF_LOWER: i32 = 119789;
pub(super) const ITALIC_SANS_UPPER: i32 = 120263;
pub(super) const ITALIC_SANS_LOWER: i32 = 120257;
pub(super) const BOLD_ITALIC_SERIF_UPPER: i32 = 119847;
pub(super) const BOLD_ITALIC_SERIF_LOWER: i32 = 119841;
pub(super) const BOLD_ITALIC_SANS_UPPER: i32 = 120315;
pub(super) const BOLD_ITALIC_SANS_LOWER: i32 = 120309;

/// Per-class offsets for one variant. `None` means the class is outside the
/// variant's domain and maps to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetTable {
    pub upper: Option<i32>,
    pub lower: Option<i32>,
    pub digit: Option<i32>,
}

impl OffsetTable {
    /// Table that maps letters only.
    pub const fn letters(upper: i32, lower: i32) -> Self {
        Self {
            upper: Some(upper),
            lower: Some(lower),
            digit: None,
        }
    }

    /// Table that maps letters and decimal digits.
    pub const fn alphanumeric(upper: i32, lower: i32, digit: i32) -> Self {
        Self {
            upper: Some(upper),
            lower: Some(lower),
            digit: Some(digit),
        }
    }

    /// Offset for a class, if the class is mapped.
    pub fn offset_for(&self, class: CharClass) -> Option<i32> {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digit,
            CharClass::Other => None,
        }
    }

    /// Map a single scalar through the table.
    pub fn map_char(&self, c: char, fallback: char) -> char {
        match self.offset_for(CharClass::of(c)) {
            Some(offset) => shift(c, offset, fallback),
            None => c,
        }
    }

    /// Map every scalar of `input` through the table.
    pub fn map_str(&self, input: &str, fallback: char) -> String {
        input.chars().map(|c| self.map_char(c, fallback)).collect()
    }
}

/// Add `offset` to `c`, yielding `fallback` when the sum is not a valid
/// Unicode scalar (negative, a surrogate, or above U+10FFFF).
pub fn shift(c: char, offset: i32, fallback: char) -> char {
    let target = i64::from(u32::from(c)) + i64::from(offset);
    u32::try_from(target)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(fallback)
}
