//! Cross-cutting error types for triad.
//!
//! Stage-specific errors (`ExtractError`, `SemanticError`, `ConfigError`) live in
//! their own crates. `triad-engine` wraps a [`CoreError`] with the pipeline stage
//! that raised it.

use thiserror::Error;

/// Errors raised while constructing or combining domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A claim confidence fell outside `[0, 1]`.
    #[error("Invalid confidence {value}: must be within [0, 1]")]
    InvalidConfidence { value: f64 },

    /// A stage was handed a claim bucket with nothing in it.
    #[error("Empty claim bucket for {endpoint}")]
    EmptyBucket { endpoint: String },

    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
