//! Extraction error types.

/// Errors raised inside an extractor.
///
/// These never cross the public extraction functions: an unparseable
/// contract yields an empty evidence list, never partial evidence.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("API contract could not be parsed: {0}")]
    ContractParse(String),

    #[error("unsupported artifact: {0}")]
    UnsupportedArtifact(String),
}
