//! Unified error hierarchy for dipmax.
//!
//! The calculation engine itself is infallible on well-typed input; the
//! variants here cover the shell around it — rejected form input,
//! configuration handling, and report serialization.

use thiserror::Error;

use crate::validation::ValidationError;

/// Top-level error type for all dipmax operations
#[derive(Debug, Error)]
pub enum DipMaxError {
    /// Form input rejected before the engine ran
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result alias for dipmax operations
pub type Result<T> = std::result::Result<T, DipMaxError>;
