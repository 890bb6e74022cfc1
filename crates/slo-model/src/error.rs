//! Error types for the slo-model crate.

use thiserror::Error;

/// Errors that can occur while building or parsing model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Invalid rule definition.
    #[error("invalid rule: {reason}")]
    InvalidRule {
        /// The reason the rule is invalid.
        reason: String,
    },

    /// Invalid duration specification.
    #[error("invalid duration: {reason}")]
    InvalidDuration {
        /// The reason the duration is invalid.
        reason: String,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
