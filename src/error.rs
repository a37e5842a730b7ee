//! Typed errors for name lookups at the engine boundary.
//!
//! Transformations themselves never fail; these only come from resolving
//! user-supplied names (config entries, command-line flags).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No transform variant has this key or display name.
    #[error("unknown transform variant '{0}' (run `fancy-text list-variants`)")]
    UnknownVariant(String),

    /// No combining mark in the catalog has this name.
    #[error("unknown combining mark '{0}' (run `fancy-text list-marks`)")]
    UnknownMark(String),
}
