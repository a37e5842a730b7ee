//! Configuration management.
//!
//! Re-exports all configuration types from the `fancy-text-config` crate.

pub use fancy_text_config::*;
