//! Upside-down ("flip 180") rendering by dictionary substitution.

use unicode_segmentation::UnicodeSegmentation;

/// Rotated counterpart of a single scalar, if one exists.
fn flipped(c: char) -> Option<char> {
    let mapped = match c {
        'a' => '\u{0250}',
        'b' => 'q',
        'c' => '\u{0254}',
        'd' => 'p',
        'e' => '\u{01DD}',
        'f' => '\u{025F}',
        'g' => '\u{0253}',
        'h' => '\u{0265}',
        'i' => '\u{0131}',
        'j' => '\u{027E}',
        'k' => '\u{029E}',
        'l' => 'l',
        'm' => '\u{026F}',
        'n' => 'u',
        'o' => 'o',
        'p' => 'd',
        'q' => 'b',
        'r' => '\u{0279}',
        's' => 's',
        't' => '\u{0287}',
        'u' => 'n',
        'v' => '\u{028C}',
        'w' => '\u{028D}',
        'x' => 'x',
        'y' => '\u{028E}',
        'z' => 'z',
        'A' => '\u{2200}',
        'B' => '\u{1660}',
        'C' => '\u{0186}',
        'D' => '\u{15E1}',
        'E' => '\u{018E}',
        'F' => '\u{2132}',
        'G' => '\u{2141}',
        'H' => 'H',
        'I' => 'I',
        'J' => '\u{017F}',
        'K' => '\u{22CA}',
        'L' => '\u{02E5}',
        'M' => 'W',
        'N' => 'N',
        'O' => 'O',
        'P' => '\u{0500}',
        'Q' => '\u{038C}',
        'R' => '\u{1D1A}',
        'S' => 'S',
        'T' => '\u{22A5}',
        'U' => '\u{2229}',
        'V' => '\u{039B}',
        'W' => 'M',
        'X' => 'X',
        'Y' => '\u{2144}',
        'Z' => 'Z',
        '&' => '\u{214B}',
        '.' => '\u{02D9}',
        '"' => '\u{201E}',
        ';' => '\u{061B}',
        '[' => ']',
        '(' => ')',
        '{' => '}',
        '?' => '\u{00BF}',
        '!' => '\u{00A1}',
        ' ' => ' ',
        _ => return None,
    };
    Some(mapped)
}

/// Reverse `input` by grapheme, then rotate each grapheme that has a
/// counterpart. Unmapped graphemes keep their (reversed) position.
pub(super) fn flip_180(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for grapheme in input.graphemes(true).rev() {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match flipped(c) {
                Some(mapped) => result.push(mapped),
                None => result.push(c),
            },
            _ => result.push_str(grapheme),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ascii_letter_has_a_flip() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(flipped(c).is_some(), "missing flip for {c:?}");
        }
    }

    #[test]
    fn test_closing_brackets_are_not_mapped() {
        assert_eq!(flipped(']'), None);
        assert_eq!(flipped(')'), None);
    }
}
