//! Error types for kinet_animation
//!
//! Configuration gaps never escape the public API - animations degrade and
//! continue instead. These kinds exist so the internal fallible paths
//! (easing lookup, value parsing, snapshot capture) stay testable.

use thiserror::Error;

/// Errors that can occur while building or advancing animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// No easing function registered under this name
    #[error("unknown easing function: {name}")]
    UnknownEasing { name: String },

    /// Raw value did not match the numeric-prefix-then-unit convention
    #[error("unparseable value: {raw:?}")]
    Unparseable { raw: String },

    /// A requested property has no readable current value on its target
    #[error("no current value for property: {property}")]
    MissingStartValue { property: String },

    /// Target specifier resolved to nothing
    #[error("target specifier resolved to no targets")]
    NoTargets,
}

/// Result type for kinet_animation internals
pub type Result<T> = std::result::Result<T, AnimationError>;
