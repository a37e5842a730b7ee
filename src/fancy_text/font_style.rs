//! Bold / italic / serif selection and the Mathematical Alphanumeric
//! Symbols tables behind it.

use super::offsets::{self, OffsetTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// U+210E PLANCK CONSTANT. The italic serif 'h' slot in Mathematical
/// Alphanumeric Symbols is reserved; this is the glyph it points to.
const PLANCK_CONSTANT: char = '\u{210E}';

/// Toggle state for the stylized output.
///
/// `serif` only matters while `bold` or `italic` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub serif: bool,
}

impl FontStyle {
    pub fn new(bold: bool, italic: bool, serif: bool) -> Self {
        Self {
            bold,
            italic,
            serif,
        }
    }

    /// Resolve the toggles to a single style variant.
    pub fn variant(&self) -> StyleVariant {
        match (self.bold, self.italic, self.serif) {
            (true, true, true) => StyleVariant::BoldItalicSerif,
            (true, true, false) => StyleVariant::BoldItalicSans,
            (true, false, true) => StyleVariant::BoldSerif,
            (true, false, false) => StyleVariant::BoldSans,
            (false, true, true) => StyleVariant::ItalicSerif,
            (false, true, false) => StyleVariant::ItalicSans,
            (false, false, _) => StyleVariant::None,
        }
    }

    /// Whether a serif toggle has any effect right now.
    pub fn show_serif_option(&self) -> bool {
        self.bold || self.italic
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A resolved font style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleVariant {
    #[default]
    None,
    BoldSerif,
    BoldSans,
    ItalicSerif,
    ItalicSans,
    BoldItalicSerif,
    BoldItalicSans,
}

impl StyleVariant {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::BoldSerif => "Bold Serif",
            Self::BoldSans => "Bold Sans Serif",
            Self::ItalicSerif => "Italic Serif",
            Self::ItalicSans => "Italic Sans Serif",
            Self::BoldItalicSerif => "Bold Italic Serif",
            Self::BoldItalicSans => "Bold Italic Sans Serif",
        }
    }

    /// Offset table for the variant; `None` for the identity style.
    ///
    /// Only the bold styles have digit glyphs.
    pub fn offset_table(&self) -> Option<OffsetTable> {
        let table = match self {
            Self::None => return None,
            Self::BoldSerif => OffsetTable::alphanumeric(
                offsets::BOLD_SERIF_UPPER,
                offsets::BOLD_SERIF_LOWER,
                offsets::BOLD_SERIF_DIGIT,
            ),
            Self::BoldSans => OffsetTable::alphanumeric(
                offsets::BOLD_SANS_UPPER,
                offsets::BOLD_SANS_LOWER,
                offsets::BOLD_SANS_DIGIT,
            ),
            Self::ItalicSerif => {
                OffsetTable::letters(offsets::ITALIC_SERIF_UPPER, offsets::ITALIC_SERIF_LOWER)
            }
            Self::ItalicSans => {
                OffsetTable::letters(offsets::ITALIC_SANS_UPPER, offsets::ITALIC_SANS_LOWER)
            }
            Self::BoldItalicSerif => OffsetTable::letters(
                offsets::BOLD_ITALIC_SERIF_UPPER,
                offsets::BOLD_ITALIC_SERIF_LOWER,
            ),
            Self::BoldItalicSans => OffsetTable::letters(
                offsets::BOLD_ITALIC_SANS_UPPER,
                offsets::BOLD_ITALIC_SANS_LOWER,
            ),
        };
        Some(table)
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Map sanitized text through a style's offset table.
///
/// The identity style returns `sanitized` unchanged here; [`apply`] is the
/// entry point that prefers the raw input for it.
pub(crate) fn style_text(variant: StyleVariant, sanitized: &str, fallback: char) -> String {
    let Some(table) = variant.offset_table() else {
        return sanitized.to_string();
    };
    sanitized
        .chars()
        .map(|c| match (variant, c) {
            (StyleVariant::ItalicSerif, 'h') => PLANCK_CONSTANT,
            _ => table.map_char(c, fallback),
        })
        .collect()
}

/// Render the base text for the stylized output.
///
/// With no style selected the raw input is returned verbatim so accents the
/// user typed survive; every other style works on the sanitized text.
pub fn apply(variant: StyleVariant, raw: &str, sanitized: &str, fallback: char) -> String {
    match variant {
        StyleVariant::None => raw.to_string(),
        _ => style_text(variant, sanitized, fallback),
    }
}
