//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields so that partial YAML files fill in the gaps.

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_true() -> bool {
    true
}

// ── Output ─────────────────────────────────────────────────────────────────

/// Variant keys rendered when the config does not list any, in display order.
pub fn variants() -> Vec<String> {
    [
        "full_width",
        "monospace",
        "script",
        "triangle",
        "circles",
        "circle_slash",
        "boxes",
        "filled_boxes",
        "parentheses",
        "sarcastic",
        "flip_180",
    ]
    .iter()
    .map(|key| key.to_string())
    .collect()
}

/// U+FFFD REPLACEMENT CHARACTER.
pub fn fallback_char() -> char {
    '\u{FFFD}'
}

// ── Logging ────────────────────────────────────────────────────────────────

pub fn log_level() -> crate::types::LogLevel {
    crate::types::LogLevel::Off
}
