//! Combining-mark catalog, per-mark selection state, and the composer that
//! interleaves active marks after letters and digits.

use super::classify::is_mark_bearing;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Where a mark renders relative to its base glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkCategory {
    Over,
    Superscript,
    Through,
    Under,
}

impl MarkCategory {
    /// Heading used when listing marks by group.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Over => "Over Marks",
            Self::Superscript => "Superscript Marks",
            Self::Through => "Through Marks",
            Self::Under => "Under Marks",
        }
    }

    /// All categories in catalog order.
    pub fn all() -> &'static [MarkCategory] {
        &[Self::Over, Self::Superscript, Self::Through, Self::Under]
    }
}

impl fmt::Display for MarkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One entry of the fixed combining-mark catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombiningMark {
    pub name: &'static str,
    pub category: MarkCategory,
    pub scalar: char,
}

impl CombiningMark {
    const fn new(name: &'static str, category: MarkCategory, scalar: char) -> Self {
        Self {
            name,
            category,
            scalar,
        }
    }

    pub fn code_point(&self) -> u32 {
        u32::from(self.scalar)
    }
}

use MarkCategory::{Over, Superscript, Through, Under};

/// Number of marks in [`MARK_CATALOG`].
pub const MARK_COUNT: usize = 42;

/// The mark catalog. Order is significant: active marks are emitted in this
/// order, and stacked marks render differently when reordered.
pub static MARK_CATALOG: [CombiningMark; MARK_COUNT] = [
    // Over
    CombiningMark::new("carat", Over, '\u{0302}'),
    CombiningMark::new("tilde", Over, '\u{0303}'),
    CombiningMark::new("overline", Over, '\u{0305}'),
    CombiningMark::new("acute accent", Over, '\u{0301}'),
    CombiningMark::new("diaeresis", Over, '\u{0308}'),
    CombiningMark::new("hook above", Over, '\u{0309}'),
    CombiningMark::new("candrabindu", Over, '\u{0310}'),
    CombiningMark::new("x", Over, '\u{033D}'),
    CombiningMark::new("vertical tilde", Over, '\u{033E}'),
    CombiningMark::new("dialytika", Over, '\u{0344}'),
    CombiningMark::new("almost above", Over, '\u{034C}'),
    CombiningMark::new("zigzag above", Over, '\u{035B}'),
    // Superscript letters
    CombiningMark::new("super a", Superscript, '\u{0363}'),
    CombiningMark::new("super e", Superscript, '\u{0364}'),
    CombiningMark::new("super i", Superscript, '\u{0365}'),
    CombiningMark::new("super o", Superscript, '\u{0366}'),
    CombiningMark::new("super u", Superscript, '\u{0367}'),
    CombiningMark::new("super c", Superscript, '\u{0368}'),
    CombiningMark::new("super d", Superscript, '\u{0369}'),
    CombiningMark::new("super h", Superscript, '\u{036A}'),
    CombiningMark::new("super m", Superscript, '\u{036B}'),
    CombiningMark::new("super r", Superscript, '\u{036C}'),
    CombiningMark::new("super t", Superscript, '\u{036D}'),
    CombiningMark::new("super v", Superscript, '\u{036E}'),
    CombiningMark::new("super x", Superscript, '\u{036F}'),
    // Through
    CombiningMark::new("tilde overlay", Through, '\u{0334}'),
    CombiningMark::new("strikethrough", Through, '\u{0336}'),
    CombiningMark::new("slash", Through, '\u{0338}'),
    CombiningMark::new("reverse solidus overlay", Through, '\u{20E5}'),
    CombiningMark::new("double vertical overlay", Through, '\u{20E6}'),
    CombiningMark::new("left arrow overlay", Through, '\u{20EA}'),
    // Under
    CombiningMark::new("ogonek", Under, '\u{0328}'),
    CombiningMark::new("vertical line below", Under, '\u{0329}'),
    CombiningMark::new("double arch below", Under, '\u{032B}'),
    CombiningMark::new("underline", Under, '\u{0331}'),
    CombiningMark::new("equals below", Under, '\u{0347}'),
    CombiningMark::new("left-right arrow below", Under, '\u{034D}'),
    CombiningMark::new("up arrow below", Under, '\u{034E}'),
    CombiningMark::new("asterisk below", Under, '\u{0359}'),
    CombiningMark::new("double ring below", Under, '\u{035A}'),
    CombiningMark::new("right harpoon", Under, '\u{20EC}'),
    CombiningMark::new("left harpoon", Under, '\u{20ED}'),
];

/// Index into [`MARK_CATALOG`]. Only constructible for valid positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(usize);

impl MarkId {
    pub fn new(index: usize) -> Option<Self> {
        (index < MARK_COUNT).then_some(Self(index))
    }

    /// Look a mark up by catalog name. Case, hyphens and underscores are
    /// ignored, so `"left_right_arrow_below"` finds `"left-right arrow below"`.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        let wanted = normalize_name(name);
        MARK_CATALOG
            .iter()
            .position(|mark| normalize_name(mark.name) == wanted)
            .map(Self)
            .ok_or_else(|| EngineError::UnknownMark(name.to_string()))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn mark(self) -> &'static CombiningMark {
        &MARK_CATALOG[self.0]
    }

    /// Every id in catalog order.
    pub fn all() -> impl Iterator<Item = MarkId> {
        (0..MARK_COUNT).map(Self)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Which catalog marks are switched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSelection {
    active: [bool; MARK_COUNT],
}

impl Default for MarkSelection {
    fn default() -> Self {
        Self {
            active: [false; MARK_COUNT],
        }
    }
}

impl MarkSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, id: MarkId) -> bool {
        self.active[id.0]
    }

    pub fn set_active(&mut self, id: MarkId, active: bool) {
        self.active[id.0] = active;
    }

    /// Flip one mark; returns the new state.
    pub fn toggle(&mut self, id: MarkId) -> bool {
        self.active[id.0] = !self.active[id.0];
        self.active[id.0]
    }

    pub fn clear(&mut self) {
        self.active = [false; MARK_COUNT];
    }

    pub fn any_active(&self) -> bool {
        self.active.iter().any(|&on| on)
    }

    /// Active marks in catalog order, independent of toggle order.
    pub fn active_marks(&self) -> impl Iterator<Item = &'static CombiningMark> + '_ {
        MARK_CATALOG
            .iter()
            .zip(self.active.iter())
            .filter(|(_, on)| **on)
            .map(|(mark, _)| mark)
    }

    /// Scalars of the active marks in catalog order.
    pub fn active_scalars(&self) -> Vec<char> {
        self.active_marks().map(|mark| mark.scalar).collect()
    }
}

/// Emit each grapheme of `base`, followed by every mark in `marks` when the
/// grapheme is a letter or digit. Whitespace and punctuation get nothing.
pub fn compose(base: &str, marks: &[char]) -> String {
    if marks.is_empty() {
        return base.to_string();
    }

    let mut result = String::with_capacity(base.len() * (1 + marks.len() * 2));
    for grapheme in base.graphemes(true) {
        result.push_str(grapheme);
        if is_mark_bearing(grapheme) {
            result.extend(marks.iter());
        }
    }
    result
}
