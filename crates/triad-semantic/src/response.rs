//! Parsing of model replies into observations.

use serde_json::Value;

use crate::SectionObservation;
use crate::error::SemanticError;

/// Strip one optional Markdown code fence (```` ```json ... ``` ````).
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`, `JSON`, ...) on the opening fence line.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Parse a model reply into observations.
///
/// The reply must be a JSON array (optionally fenced). Items that are not
/// objects with string `endpoint`, `observation` and `raw_snippet` fields are
/// dropped one by one; the rest of the reply still counts.
///
/// # Errors
///
/// Returns [`SemanticError::MalformedOutput`] if the reply is not JSON or not
/// an array.
pub fn parse_observations(text: &str) -> Result<Vec<SectionObservation>, SemanticError> {
    let body = strip_code_fences(text);
    let value: Value =
        serde_json::from_str(body).map_err(|e| SemanticError::MalformedOutput(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(SemanticError::MalformedOutput(
            "expected a JSON array of observations".into(),
        ));
    };

    let total = items.len();
    let observations: Vec<SectionObservation> = items.iter().filter_map(observation_from).collect();
    if observations.len() < total {
        tracing::debug!(
            dropped = total - observations.len(),
            "dropped incomplete model items"
        );
    }
    Ok(observations)
}

fn observation_from(item: &Value) -> Option<SectionObservation> {
    let field = |name: &str| item.get(name).and_then(Value::as_str).map(str::to_string);
    Some(SectionObservation {
        endpoint: field("endpoint")?,
        observation: field("observation")?,
        raw_snippet: field("raw_snippet")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_json_fence() {
        let text = "```json\n[{\"a\": 1}]\n```";
        assert_eq!(strip_code_fences(text), "[{\"a\": 1}]");
    }

    #[test]
    fn unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fences("  []\n"), "[]");
    }

    #[test]
    fn parses_complete_items_and_drops_incomplete_ones() {
        let text = r#"```json
[
  {"endpoint": "GET /users/{id}", "observation": "returns HTTP 404", "raw_snippet": "returns 404"},
  {"endpoint": "GET /users", "observation": "returns HTTP 200"},
  {"endpoint": 7, "observation": "x", "raw_snippet": "y"},
  "not an object"
]
```"#;
        let observations = parse_observations(text).expect("array parses");
        assert_eq!(
            observations,
            vec![SectionObservation {
                endpoint: "GET /users/{id}".into(),
                observation: "returns HTTP 404".into(),
                raw_snippet: "returns 404".into(),
            }]
        );
    }

    #[test]
    fn object_reply_is_malformed() {
        let err = parse_observations(r#"{"endpoint": "GET /"}"#).unwrap_err();
        assert!(matches!(err, SemanticError::MalformedOutput(_)));
    }

    #[test]
    fn prose_reply_is_malformed() {
        let err = parse_observations("I could not find any endpoints.").unwrap_err();
        assert!(matches!(err, SemanticError::MalformedOutput(_)));
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(parse_observations("[]").expect("parses").is_empty());
    }
}
