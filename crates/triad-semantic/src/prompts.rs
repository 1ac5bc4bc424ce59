//! Prompt text sent to the model.

use crate::UnitSummary;
use crate::error::SemanticError;

pub const EXTRACTION_SYSTEM: &str = "You extract literal API behavior statements from \
documentation. Emit only what is explicitly written, never infer missing details, and write \
endpoints as METHOD /path with path parameters in curly braces.";

/// Extraction prompt for one README section.
#[must_use]
pub fn extraction_prompt(section: &str) -> String {
    format!(
        r#"Read the README section below and list the API behavior it states.

Section:
{section}

Rules:
- Only list literal, testable statements about observable API behavior.
- Do not summarize, combine, generalize or infer.
- Each item must come from one contiguous piece of text.
- raw_snippet must be copied character for character from the section.
- If the section names no endpoint, answer with an empty array.

Useful statements cover status codes and error conditions, input requirements,
output formats, and explicit per-endpoint behavior.

Answer with a JSON array whose items have:
- endpoint: e.g. "GET /users/{{id}}"
- observation: e.g. "returns HTTP 404 when user not found"
- raw_snippet: the verbatim source text

Answer with the bare JSON array only: no code fences, no commentary."#
    )
}

pub const NARRATION_SYSTEM: &str = "You explain disagreements between an API's documentation, \
contract and tests. Describe what each artifact says. Do not decide which one is correct.";

/// Narration prompt for one behavioral unit.
///
/// # Errors
///
/// Returns [`SemanticError::MalformedOutput`] if the summary cannot be serialized.
pub fn narration_prompt(unit: &UnitSummary) -> Result<String, SemanticError> {
    let payload = serde_json::to_string_pretty(unit)
        .map_err(|e| SemanticError::MalformedOutput(e.to_string()))?;
    Ok(format!(
        "Below is one behavioral unit of an HTTP API as JSON. In two or three plain \
sentences, say what behavior it covers and how the artifacts differ. Mention the \
sources by name (test, api_spec, readme).\n\n{payload}"
    ))
}
