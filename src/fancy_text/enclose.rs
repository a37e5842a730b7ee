//! Transforms that inject a fixed combining or enclosing mark into the raw
//! input rather than substituting code points.

use super::classify::is_mark_bearing;
use super::mapper::IDEOGRAPHIC_SPACE;
use unicode_segmentation::UnicodeSegmentation;

/// U+20E4 COMBINING ENCLOSING UPWARD POINTING TRIANGLE
pub(super) const TRIANGLE_ENCLOSING: char = '\u{20E4}';
/// U+20E0 COMBINING ENCLOSING CIRCLE BACKSLASH
pub(super) const CIRCLE_SLASH_ENCLOSING: char = '\u{20E0}';
/// U+033D COMBINING X ABOVE
pub(super) const LITTLE_X: char = '\u{033D}';
/// U+0336 COMBINING LONG STROKE OVERLAY
pub(super) const LONG_STROKE: char = '\u{0336}';
/// U+0331 COMBINING MACRON BELOW
pub(super) const MACRON_BELOW: char = '\u{0331}';

/// Append `mark` after every letter or digit; literal spaces widen to an
/// ideographic space so enclosed glyphs don't collide.
pub(super) fn enclose_alphanumerics(input: &str, mark: char) -> String {
    let mut result = String::with_capacity(input.len() * 2);
    for grapheme in input.graphemes(true) {
        if grapheme == " " {
            result.push(IDEOGRAPHIC_SPACE);
        } else if is_mark_bearing(grapheme) {
            result.push_str(grapheme);
            result.push(mark);
        } else {
            result.push_str(grapheme);
        }
    }
    result
}

/// Append `mark` after every grapheme, spaces included, so strokes and
/// underlines render as one continuous line.
pub(super) fn mark_every_grapheme(input: &str, mark: char) -> String {
    let mut result = String::with_capacity(input.len() * 2);
    for grapheme in input.graphemes(true) {
        result.push_str(grapheme);
        result.push(mark);
    }
    result
}
