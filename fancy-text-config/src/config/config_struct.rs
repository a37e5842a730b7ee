//! Core `Config` struct definition.

use crate::types::LogLevel;
use serde::{Deserialize, Serialize};

/// Top-level fancy-text configuration, stored as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Special outputs
    // ========================================================================
    /// Variant keys to render, in display order (e.g. `full_width`, `flip_180`).
    /// Unknown keys are skipped with a warning; an empty list means the
    /// default catalog.
    #[serde(default = "crate::defaults::variants")]
    pub variants: Vec<String>,

    /// Scalar emitted when offset arithmetic lands outside the valid
    /// Unicode scalar range.
    #[serde(default = "crate::defaults::fallback_char")]
    pub fallback_char: char,

    // ========================================================================
    // Presentation
    // ========================================================================
    /// Prefix each output line with its variant label
    #[serde(default = "crate::defaults::bool_true")]
    pub show_labels: bool,

    /// Print the stylized (font style + combining marks) output after the
    /// special outputs
    #[serde(default = "crate::defaults::bool_true")]
    pub include_stylized: bool,

    // ========================================================================
    // Debug Logging
    // ========================================================================
    /// Log level written to the debug log file
    #[serde(default = "crate::defaults::log_level")]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variants: crate::defaults::variants(),
            fallback_char: crate::defaults::fallback_char(),
            show_labels: true,
            include_stylized: true,
            log_level: crate::defaults::log_level(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the variant list
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback scalar
    pub fn with_fallback_char(mut self, fallback: char) -> Self {
        self.fallback_char = fallback;
        self
    }

    /// Set the debug log level
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Variant keys to render, falling back to the default catalog when the
    /// configured list is empty.
    pub fn effective_variants(&self) -> Vec<String> {
        if self.variants.is_empty() {
            crate::defaults::variants()
        } else {
            self.variants.clone()
        }
    }
}
