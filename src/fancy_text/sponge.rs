//! Sarcastic ("sponge") case: alternate lower/upper per letter.

use super::classify::is_letter;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercase on even letter counts, uppercase on odd, starting at zero.
/// Only letters advance the counter, so spaces and punctuation never break
/// the alternation.
pub(super) fn sarcastic(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut letters = 0usize;

    for grapheme in input.graphemes(true) {
        if letters % 2 == 0 {
            result.push_str(&grapheme.to_lowercase());
        } else {
            result.push_str(&grapheme.to_uppercase());
        }
        if is_letter(grapheme) {
            letters += 1;
        }
    }
    result
}
