//! Semantic collaborator error types.

use thiserror::Error;

/// Failures talking to the semantic collaborator.
///
/// Every variant is recoverable: extraction falls back to the deterministic
/// extractor and narration is omitted.
#[derive(Debug, Error)]
pub enum SemanticError {
    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The model answered without any text.
    #[error("model returned no text")]
    EmptyResponse,

    /// The model answered, but not in the requested shape.
    #[error("malformed model output: {0}")]
    MalformedOutput(String),

    /// No collaborator is configured for this run.
    #[error("semantic service unavailable: {0}")]
    Unavailable(String),
}
