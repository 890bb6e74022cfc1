//! Error types for the slo-mutators crate.

use thiserror::Error;

/// Errors that can occur while constructing or invoking a mutator.
#[derive(Debug, Error)]
pub enum MutatorError {
    /// Configuration rejected at construction time. Fatal to that mutator;
    /// never raised during invocation.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// The reason the configuration is invalid.
        reason: String,
    },

    /// A mutation failed partway through. Reserved for mutators whose
    /// operations can fail mid-flight; none of the built-in mutators
    /// produce it.
    #[error("mutation failed: {reason}")]
    MutationFailed {
        /// The reason the mutation failed.
        reason: String,
    },
}

impl From<serde_json::Error> for MutatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

impl From<slo_model::ModelError> for MutatorError {
    fn from(err: slo_model::ModelError) -> Self {
        Self::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

/// Result type for mutator operations.
pub type Result<T> = std::result::Result<T, MutatorError>;
