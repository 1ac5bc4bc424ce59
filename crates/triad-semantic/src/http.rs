//! Status handling for `generateContent` replies.
//!
//! A reply that is not 2xx never reaches the JSON decoder. Callers receive a
//! [`SemanticError`] instead, and the README extractor or narrator falls back.

use reqwest::StatusCode;
use reqwest::blocking::Response;
use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::error::SemanticError;

/// Pass a 2xx reply through; map quota exhaustion to
/// [`SemanticError::RateLimited`] (seconds from `Retry-After`, else 60) and
/// any other status to [`SemanticError::Api`] carrying the body text.
pub fn check_response(resp: Response) -> Result<Response, SemanticError> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(SemanticError::RateLimited {
            retry_after_secs: parse_retry_after(resp.headers()),
        });
    }
    if !status.is_success() {
        return Err(SemanticError::Api {
            status: status.as_u16(),
            message: resp.text().unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}
