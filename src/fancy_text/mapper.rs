//! Offset-table transforms over sanitized input: full width, monospace,
//! script, circles, boxes, filled boxes, parentheses.

use super::offsets::{self, OffsetTable};

/// U+3000 IDEOGRAPHIC SPACE, the full-width counterpart of ASCII space.
pub(super) const IDEOGRAPHIC_SPACE: char = '\u{3000}';
/// U+24EA CIRCLED DIGIT ZERO, which sits outside the circled-digit run.
const CIRCLED_ZERO: char = '\u{24EA}';

const MONOSPACE: OffsetTable = OffsetTable::alphanumeric(
    offsets::MONOSPACE_UPPER,
    offsets::MONOSPACE_LOWER,
    offsets::MONOSPACE_DIGIT,
);
const SCRIPT: OffsetTable = OffsetTable::letters(offsets::SCRIPT_UPPER, offsets::SCRIPT_LOWER);
const CIRCLES: OffsetTable = OffsetTable::alphanumeric(
    offsets::CIRCLE_UPPER,
    offsets::CIRCLE_LOWER,
    offsets::CIRCLE_DIGIT,
);
const BOXES: OffsetTable = OffsetTable::letters(offsets::SQUARED_UPPER, offsets::SQUARED_LOWER);
const FILLED_BOXES: OffsetTable = OffsetTable::letters(
    offsets::NEGATIVE_SQUARED_UPPER,
    offsets::NEGATIVE_SQUARED_LOWER,
);
const PARENTHESES: OffsetTable = OffsetTable::alphanumeric(
    offsets::PAREN_UPPER,
    offsets::PAREN_LOWER,
    offsets::PAREN_DIGIT,
);

/// Every ASCII scalar shifted into Halfwidth and Fullwidth Forms; space
/// becomes an ideographic space. Non-ASCII passes through.
pub(super) fn full_width(input: &str, fallback: char) -> String {
    input
        .chars()
        .map(|c| match c {
            ' ' => IDEOGRAPHIC_SPACE,
            c if c.is_ascii() => offsets::shift(c, offsets::FULL_WIDTH, fallback),
            c => c,
        })
        .collect()
}

pub(super) fn monospace(input: &str, fallback: char) -> String {
    MONOSPACE.map_str(input, fallback)
}

pub(super) fn script(input: &str, fallback: char) -> String {
    SCRIPT.map_str(input, fallback)
}

/// Circled letters and digits; '0' has its own code point.
pub(super) fn circles(input: &str, fallback: char) -> String {
    input
        .chars()
        .map(|c| match c {
            '0' => CIRCLED_ZERO,
            c => CIRCLES.map_char(c, fallback),
        })
        .collect()
}

pub(super) fn boxes(input: &str, fallback: char) -> String {
    BOXES.map_str(input, fallback)
}

pub(super) fn filled_boxes(input: &str, fallback: char) -> String {
    FILLED_BOXES.map_str(input, fallback)
}

/// Parenthesized letters and digits. There is no parenthesized zero, so '0'
/// is left as is.
pub(super) fn parentheses(input: &str, fallback: char) -> String {
    input
        .chars()
        .map(|c| match c {
            '0' => c,
            c => PARENTHESES.map_char(c, fallback),
        })
        .collect()
}
