//! Unicode "fancy text" transformations.
//!
//! Turns plain text into stylized renderings by remapping code points into
//! other Unicode blocks (full width, mathematical alphanumerics, enclosed
//! alphanumerics) or by attaching combining marks.
//!
//! # Sub-modules
//!
//! - [`classify`]: ASCII-keyed character classes for offset lookup
//! - [`offsets`]: per-variant offset tables and checked scalar arithmetic
//! - `mapper`: full width, monospace, script, circles, boxes, parentheses
//! - `flip`: upside-down dictionary substitution
//! - `sponge`: sarcastic alternating case
//! - `enclose`: enclosing and overlay marks injected into raw input
//! - [`sanitize`]: diacritic stripping
//! - [`font_style`]: bold/italic/serif resolution and styling
//! - [`marks`]: combining-mark catalog, selection, composition

pub mod classify;
mod enclose;
mod flip;
pub mod font_style;
mod mapper;
pub mod marks;
pub mod offsets;
pub mod sanitize;
mod sponge;

#[cfg(test)]
mod tests;

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export the public API
pub use font_style::{FontStyle, StyleVariant};
pub use marks::{CombiningMark, MARK_CATALOG, MarkCategory, MarkId, MarkSelection, compose};
pub use sanitize::strip_diacritics;

use font_style::style_text;

/// Scalar used when offset arithmetic leaves the valid Unicode range.
pub const DEFAULT_FALLBACK: char = '\u{FFFD}';

/// Which form of the user's text a variant reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Diacritics stripped, so ASCII-keyed tables match accented letters.
    Sanitized,
    /// Exactly what the user typed.
    Raw,
}

/// Available special-output transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformVariant {
    FullWidth,
    Monospace,
    Script,
    Triangle,
    Circles,
    CircleSlash,
    Boxes,
    FilledBoxes,
    Parentheses,
    Sarcastic,
    Flip180,

    // Extended catalog
    LittleX,
    Strikethrough,
    Underline,
    BoldSerif,
    BoldSans,
    ItalicSerif,
    ItalicSans,
    BoldItalicSerif,
    BoldItalicSans,
}

impl TransformVariant {
    /// Label shown next to the output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FullWidth => "Full Width",
            Self::Monospace => "Monospace",
            Self::Script => "Script",
            Self::Triangle => "Triangle",
            Self::Circles => "Circles",
            Self::CircleSlash => "Circle Slash",
            Self::Boxes => "Boxes",
            Self::FilledBoxes => "Filled Boxes",
            Self::Parentheses => "Parentheses",
            Self::Sarcastic => "Sarcastic",
            Self::Flip180 => "Flip 180",
            Self::LittleX => "Little X",
            Self::Strikethrough => "Strikethrough",
            Self::Underline => "Underline",
            Self::BoldSerif => "Bold Serif",
            Self::BoldSans => "Bold Sans Serif",
            Self::ItalicSerif => "Italic Serif",
            Self::ItalicSans => "Italic Sans Serif",
            Self::BoldItalicSerif => "Bold Italic Serif",
            Self::BoldItalicSans => "Bold Italic Sans Serif",
        }
    }

    /// Stable identifier used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullWidth => "full_width",
            Self::Monospace => "monospace",
            Self::Script => "script",
            Self::Triangle => "triangle",
            Self::Circles => "circles",
            Self::CircleSlash => "circle_slash",
            Self::Boxes => "boxes",
            Self::FilledBoxes => "filled_boxes",
            Self::Parentheses => "parentheses",
            Self::Sarcastic => "sarcastic",
            Self::Flip180 => "flip_180",
            Self::LittleX => "little_x",
            Self::Strikethrough => "strikethrough",
            Self::Underline => "underline",
            Self::BoldSerif => "bold_serif",
            Self::BoldSans => "bold_sans",
            Self::ItalicSerif => "italic_serif",
            Self::ItalicSans => "italic_sans",
            Self::BoldItalicSerif => "bold_italic_serif",
            Self::BoldItalicSans => "bold_italic_sans",
        }
    }

    /// Short description of what the transform does.
    pub fn description(&self) -> &'static str {
        match self {
            Self::FullWidth => "Fullwidth forms, space becomes an ideographic space",
            Self::Monospace => "Mathematical monospace letters and digits",
            Self::Script => "Bold script letters",
            Self::Triangle => "Enclosing triangle after each letter or digit",
            Self::Circles => "Circled letters and digits",
            Self::CircleSlash => "Enclosing circle backslash after each letter or digit",
            Self::Boxes => "Squared letters",
            Self::FilledBoxes => "Negative squared letters",
            Self::Parentheses => "Parenthesized letters and digits (no zero)",
            Self::Sarcastic => "aLtErNaTiNg case, counted per letter",
            Self::Flip180 => "Reversed and turned upside down",
            Self::LittleX => "Combining x above every character",
            Self::Strikethrough => "Long stroke overlay through every character",
            Self::Underline => "Macron below every character",
            Self::BoldSerif => "Mathematical bold letters and digits",
            Self::BoldSans => "Mathematical sans-serif bold letters and digits",
            Self::ItalicSerif => "Mathematical italic letters",
            Self::ItalicSans => "Mathematical sans-serif italic letters",
            Self::BoldItalicSerif => "Mathematical bold italic letters",
            Self::BoldItalicSans => "Mathematical sans-serif bold italic letters",
        }
    }

    /// Whether the variant reads the sanitized or the raw input.
    ///
    /// The enclosing, overlay and sarcastic variants keep the user's own
    /// characters so accents and casing cadence survive.
    pub fn input_source(&self) -> InputSource {
        match self {
            Self::Triangle
            | Self::CircleSlash
            | Self::Sarcastic
            | Self::LittleX
            | Self::Strikethrough
            | Self::Underline => InputSource::Raw,
            _ => InputSource::Sanitized,
        }
    }

    /// The variants rendered by default, in display order.
    pub fn default_catalog() -> &'static [TransformVariant] {
        &[
            Self::FullWidth,
            Self::Monospace,
            Self::Script,
            Self::Triangle,
            Self::Circles,
            Self::CircleSlash,
            Self::Boxes,
            Self::FilledBoxes,
            Self::Parentheses,
            Self::Sarcastic,
            Self::Flip180,
        ]
    }

    /// Every variant, default catalog first.
    pub fn all() -> &'static [TransformVariant] {
        &[
            Self::FullWidth,
            Self::Monospace,
            Self::Script,
            Self::Triangle,
            Self::Circles,
            Self::CircleSlash,
            Self::Boxes,
            Self::FilledBoxes,
            Self::Parentheses,
            Self::Sarcastic,
            Self::Flip180,
            Self::LittleX,
            Self::Strikethrough,
            Self::Underline,
            Self::BoldSerif,
            Self::BoldSans,
            Self::ItalicSerif,
            Self::ItalicSans,
            Self::BoldItalicSerif,
            Self::BoldItalicSans,
        ]
    }

    /// Look a variant up by key or display name (case-insensitive).
    pub fn from_key(key: &str) -> Result<Self, EngineError> {
        let wanted = key.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.key() == wanted || v.display_name().to_lowercase() == wanted)
            .ok_or_else(|| EngineError::UnknownVariant(key.to_string()))
    }

    /// Check if the display name matches a search query.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let name = self.display_name().to_lowercase();
        let query = query.to_lowercase();
        name.contains(&query) || self.key().contains(&query)
    }
}

impl fmt::Display for TransformVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Apply a transformation.
///
/// `raw` is the user's text, `sanitized` the result of [`strip_diacritics`]
/// on it; each variant picks the one named by [`TransformVariant::input_source`].
/// Never fails: out-of-range arithmetic yields `fallback`, characters outside
/// a variant's domain pass through.
pub fn transform(variant: TransformVariant, raw: &str, sanitized: &str, fallback: char) -> String {
    match variant {
        // Offset tables
        TransformVariant::FullWidth => mapper::full_width(sanitized, fallback),
        TransformVariant::Monospace => mapper::monospace(sanitized, fallback),
        TransformVariant::Script => mapper::script(sanitized, fallback),
        TransformVariant::Circles => mapper::circles(sanitized, fallback),
        TransformVariant::Boxes => mapper::boxes(sanitized, fallback),
        TransformVariant::FilledBoxes => mapper::filled_boxes(sanitized, fallback),
        TransformVariant::Parentheses => mapper::parentheses(sanitized, fallback),

        // Dictionary / case
        TransformVariant::Flip180 => flip::flip_180(sanitized),
        TransformVariant::Sarcastic => sponge::sarcastic(raw),

        // Injected marks
        TransformVariant::Triangle => {
            enclose::enclose_alphanumerics(raw, enclose::TRIANGLE_ENCLOSING)
        }
        TransformVariant::CircleSlash => {
            enclose::enclose_alphanumerics(raw, enclose::CIRCLE_SLASH_ENCLOSING)
        }
        TransformVariant::LittleX => enclose::mark_every_grapheme(raw, enclose::LITTLE_X),
        TransformVariant::Strikethrough => enclose::mark_every_grapheme(raw, enclose::LONG_STROKE),
        TransformVariant::Underline => enclose::mark_every_grapheme(raw, enclose::MACRON_BELOW),

        // Font styles
        TransformVariant::BoldSerif => style_text(StyleVariant::BoldSerif, sanitized, fallback),
        TransformVariant::BoldSans => style_text(StyleVariant::BoldSans, sanitized, fallback),
        TransformVariant::ItalicSerif => style_text(StyleVariant::ItalicSerif, sanitized, fallback),
        TransformVariant::ItalicSans => style_text(StyleVariant::ItalicSans, sanitized, fallback),
        TransformVariant::BoldItalicSerif => {
            style_text(StyleVariant::BoldItalicSerif, sanitized, fallback)
        }
        TransformVariant::BoldItalicSans => {
            style_text(StyleVariant::BoldItalicSans, sanitized, fallback)
        }
    }
}

/// Sanitize `input` and apply one transformation with the default fallback.
pub fn transform_text(variant: TransformVariant, input: &str) -> String {
    let sanitized = strip_diacritics(input);
    transform(variant, input, &sanitized, DEFAULT_FALLBACK)
}
