// Library exports for testing and library use
//
// The transformation core lives in `fancy_text` and is pure: every function
// takes text and returns text. `engine` layers session state on top of it
// (input, font style, mark selection, observers); `app` and `cli` are the
// command-line surface.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod config;
pub mod debug;
pub mod engine;
pub mod error;
pub mod fancy_text;

pub use engine::{
    EngineEvent, EngineObserver, NamedOutput, ObserverId, SessionState, TransformEngine,
};
pub use error::EngineError;
pub use fancy_text::{FontStyle, MarkId, StyleVariant, TransformVariant};
