//! Stylizer configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: Core `Config` struct, its `Default` impl and builders
//! - [`persistence`]: `impl Config` methods for load/save/path-resolution and validation

pub mod config_struct;
pub mod persistence;

pub use config_struct::Config;
