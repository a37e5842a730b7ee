//! Diacritic stripping ahead of the ASCII-keyed mapping tables.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{canonical_combining_class, is_combining_mark};

/// Strip diacritical marks: canonical decomposition, drop attached
/// diacritics, then recompose whatever remains.
///
/// `"Crème brûlée"` becomes `"Creme brulee"`. Characters without a
/// decomposition (CJK, emoji, `ø`) pass through unchanged.
pub fn strip_diacritics(input: &str) -> String {
    input.nfd().filter(|&c| !is_diacritic(c)).nfc().collect()
}

/// A mark that stacks on its base (non-zero combining class). Spacing vowel
/// signs and enclosing marks have class 0 and are part of the spelling, so
/// they stay.
fn is_diacritic(c: char) -> bool {
    is_combining_mark(c) && canonical_combining_class(c) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_vowel_signs_survive() {
        assert_eq!(strip_diacritics("कि"), "कि");
        assert_eq!(strip_diacritics("a\u{20DD}"), "a\u{20DD}");
    }

    #[test]
    fn test_stacked_marks_removed() {
        assert_eq!(strip_diacritics("Ǘ"), "U");
        assert_eq!(strip_diacritics("\u{05E9}\u{05B8}"), "\u{05E9}");
    }
}
