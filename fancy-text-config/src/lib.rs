//! Configuration system for fancy-text.
//!
//! This crate provides configuration loading, saving, and default values
//! for the text stylizer. It includes:
//!
//! - Which special-output variants are rendered, and in what order
//! - The fallback scalar used when offset arithmetic leaves the valid range
//! - Debug log level and output presentation options

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::LogLevel;
