//! Tests for the fancy text transformations.

use super::{
    DEFAULT_FALLBACK, FontStyle, InputSource, MarkId, StyleVariant, TransformVariant, compose,
    font_style, strip_diacritics, transform, transform_text,
};
use crate::error::EngineError;

fn chr(code: u32) -> char {
    char::from_u32(code).expect("test code point should be valid")
}

// Offset tables
#[test]
fn test_full_width_ascii() {
    for c in ('a'..='z').chain('A'..='Z') {
        let expected = chr(u32::from(c) + 65248).to_string();
        assert_eq!(transform_text(TransformVariant::FullWidth, &c.to_string()), expected);
    }
    assert_eq!(transform_text(TransformVariant::FullWidth, "!"), "\u{FF01}");
}

#[test]
fn test_full_width_space_and_non_ascii() {
    assert_eq!(transform_text(TransformVariant::FullWidth, "a b"), "ａ\u{3000}ｂ");
    assert_eq!(transform_text(TransformVariant::FullWidth, "日本"), "日本");
}

#[test]
fn test_circles() {
    assert_eq!(transform_text(TransformVariant::Circles, "0"), "⓪");
    assert_eq!(
        transform_text(TransformVariant::Circles, "5"),
        chr(53 + 9263).to_string()
    );
    assert_eq!(
        transform_text(TransformVariant::Circles, "a"),
        chr(97 + 9327).to_string()
    );
    assert_eq!(transform_text(TransformVariant::Circles, "Hi!"), "Ⓗⓘ!");
}

#[test]
fn test_parentheses() {
    assert_eq!(transform_text(TransformVariant::Parentheses, "0"), "0");
    assert_eq!(
        transform_text(TransformVariant::Parentheses, "5"),
        chr(53 + 9283).to_string()
    );
    assert_eq!(transform_text(TransformVariant::Parentheses, "ab"), "⒜⒝");
}

#[test]
fn test_monospace_and_script() {
    assert_eq!(transform_text(TransformVariant::Monospace, "Az9"), "𝙰𝚣𝟿");
    assert_eq!(transform_text(TransformVariant::Script, "Ab"), "𝓐𝓫");
    // Script has no digit table
    assert_eq!(transform_text(TransformVariant::Script, "42"), "42");
}

#[test]
fn test_boxes_ignore_case() {
    assert_eq!(transform_text(TransformVariant::Boxes, "Aa"), "🄰🄰");
    assert_eq!(transform_text(TransformVariant::FilledBoxes, "Zz"), "🆉🆉");
    assert_eq!(transform_text(TransformVariant::Boxes, "1 2"), "1 2");
}

// Sanitization
#[test]
fn test_strip_diacritics() {
    assert_eq!(strip_diacritics("café"), "cafe");
    assert_eq!(strip_diacritics("Ångström"), "Angstrom");
    assert_eq!(strip_diacritics("e\u{0301}"), "e");
    assert_eq!(strip_diacritics("plain"), "plain");
}

#[test]
fn test_offset_variants_read_sanitized_input() {
    assert_eq!(transform_text(TransformVariant::Monospace, "é"), "𝚎");
    assert_eq!(transform_text(TransformVariant::Circles, "ñ"), "ⓝ");
}

#[test]
fn test_raw_input_variants_keep_accents() {
    assert_eq!(TransformVariant::Triangle.input_source(), InputSource::Raw);
    assert_eq!(TransformVariant::Sarcastic.input_source(), InputSource::Raw);
    assert_eq!(TransformVariant::Flip180.input_source(), InputSource::Sanitized);

    assert_eq!(
        transform_text(TransformVariant::Triangle, "é"),
        "é\u{20E4}"
    );
    assert_eq!(transform_text(TransformVariant::Sarcastic, "éa"), "éA");
}

// Enclosing marks
#[test]
fn test_triangle_and_circle_slash() {
    assert_eq!(
        transform_text(TransformVariant::Triangle, "a1 !"),
        "a\u{20E4}1\u{20E4}\u{3000}!"
    );
    assert_eq!(
        transform_text(TransformVariant::CircleSlash, "no"),
        "n\u{20E0}o\u{20E0}"
    );
}

#[test]
fn test_every_grapheme_marks_include_spaces() {
    assert_eq!(
        transform_text(TransformVariant::Strikethrough, "a b"),
        "a\u{0336} \u{0336}b\u{0336}"
    );
    assert_eq!(transform_text(TransformVariant::Underline, "."), ".\u{0331}");
    assert_eq!(transform_text(TransformVariant::LittleX, "x"), "x\u{033D}");
}

// Sarcastic
#[test]
fn test_sarcastic_spaces_do_not_advance() {
    assert_eq!(transform_text(TransformVariant::Sarcastic, "a b c"), "a B c");
    assert_eq!(transform_text(TransformVariant::Sarcastic, "abc"), "aBc");
}

#[test]
fn test_sarcastic_with_punctuation() {
    assert_eq!(
        transform_text(TransformVariant::Sarcastic, "hey, you!"),
        "hEy, YoU!"
    );
    assert_eq!(transform_text(TransformVariant::Sarcastic, "1a2b"), "1a2B");
}

// Flip
#[test]
fn test_flip_reverses_order() {
    assert_eq!(transform_text(TransformVariant::Flip180, "ab"), "q\u{0250}");
    assert_eq!(
        transform_text(TransformVariant::Flip180, "hello!"),
        "\u{00A1}oll\u{01DD}\u{0265}"
    );
    assert_eq!(transform_text(TransformVariant::Flip180, "a b"), "q \u{0250}");
}

// Font styles
#[test]
fn test_font_style_resolution_table() {
    let cases = [
        ((false, false, false), StyleVariant::None),
        ((false, false, true), StyleVariant::None),
        ((true, false, false), StyleVariant::BoldSans),
        ((true, false, true), StyleVariant::BoldSerif),
        ((false, true, false), StyleVariant::ItalicSans),
        ((false, true, true), StyleVariant::ItalicSerif),
        ((true, true, false), StyleVariant::BoldItalicSans),
        ((true, true, true), StyleVariant::BoldItalicSerif),
    ];
    for ((bold, italic, serif), expected) in cases {
        assert_eq!(
            FontStyle::new(bold, italic, serif).variant(),
            expected,
            "bold={bold} italic={italic} serif={serif}"
        );
    }
}

#[test]
fn test_italic_serif_h_is_planck_constant() {
    assert_eq!(transform_text(TransformVariant::ItalicSerif, "h"), "ℎ");
    assert_eq!(transform_text(TransformVariant::ItalicSerif, "Hh"), "𝐻ℎ");
    assert_eq!(transform_text(TransformVariant::ItalicSans, "h"), "𝘩");
}

#[test]
fn test_only_bold_styles_map_digits() {
    assert_eq!(transform_text(TransformVariant::BoldSerif, "A1"), "𝐀𝟏");
    assert_eq!(transform_text(TransformVariant::BoldSans, "1"), "𝟭");
    assert_eq!(transform_text(TransformVariant::ItalicSerif, "1"), "1");
    assert_eq!(transform_text(TransformVariant::BoldItalicSans, "1"), "1");
}

#[test]
fn test_apply_none_returns_raw_input() {
    let raw = "café";
    let sanitized = strip_diacritics(raw);
    assert_eq!(
        font_style::apply(StyleVariant::None, raw, &sanitized, DEFAULT_FALLBACK),
        "café"
    );
    assert_eq!(
        font_style::apply(StyleVariant::BoldSerif, raw, &sanitized, DEFAULT_FALLBACK),
        "𝐜𝐚𝐟𝐞"
    );
}

// Combining marks
#[test]
fn test_compose_skips_space_and_punctuation() {
    let x = MarkId::from_name("x").expect("mark should exist").mark().scalar;
    assert_eq!(compose("a1 .", &[x]), "a\u{033D}1\u{033D} .");
}

#[test]
fn test_compose_multiple_marks_in_given_order() {
    assert_eq!(
        compose("ab", &['\u{0302}', '\u{0331}']),
        "a\u{0302}\u{0331}b\u{0302}\u{0331}"
    );
    assert_eq!(compose("ab", &[]), "ab");
}

// Robustness
#[test]
fn test_no_variant_panics_on_odd_input() {
    let inputs = [
        "",
        "   ",
        "👍🏽 family: 👨‍👩‍👧",
        "\u{10FFFF}\u{1F600}",
        "Привет мир",
        "مرحبا",
        "e\u{0301}\u{0301}\u{0301}",
        "\0\t\n",
    ];
    for variant in TransformVariant::all() {
        for input in inputs {
            let _ = transform_text(*variant, input);
        }
    }
    for variant in TransformVariant::all() {
        assert_eq!(transform_text(*variant, ""), "");
    }
}

#[test]
fn test_transform_is_deterministic() {
    let input = "Déjà vu 123";
    let sanitized = strip_diacritics(input);
    for variant in TransformVariant::all() {
        assert_eq!(
            transform(*variant, input, &sanitized, DEFAULT_FALLBACK),
            transform(*variant, input, &sanitized, DEFAULT_FALLBACK)
        );
    }
}

// Variant catalog
#[test]
fn test_default_catalog_order() {
    let labels: Vec<_> = TransformVariant::default_catalog()
        .iter()
        .map(|v| v.display_name())
        .collect();
    assert_eq!(
        labels,
        [
            "Full Width",
            "Monospace",
            "Script",
            "Triangle",
            "Circles",
            "Circle Slash",
            "Boxes",
            "Filled Boxes",
            "Parentheses",
            "Sarcastic",
            "Flip 180",
        ]
    );
}

#[test]
fn test_from_key_accepts_keys_and_labels() {
    for variant in TransformVariant::all() {
        assert_eq!(TransformVariant::from_key(variant.key()), Ok(*variant));
        assert_eq!(TransformVariant::from_key(variant.display_name()), Ok(*variant));
    }
    assert_eq!(
        TransformVariant::from_key("wavy"),
        Err(EngineError::UnknownVariant("wavy".to_string()))
    );
}

#[test]
fn test_matches_query() {
    assert!(TransformVariant::CircleSlash.matches_query("slash"));
    assert!(TransformVariant::CircleSlash.matches_query(""));
    assert!(!TransformVariant::Boxes.matches_query("circle"));
}
