//! Phase 3 condition extraction.

use std::sync::OnceLock;

use regex::Regex;

/// Predicate phrase → normalized predicate token.
pub const PREDICATES: &[(&str, &str)] = &[
    ("is missing", "NOT_EXISTS"),
    ("does not exist", "NOT_EXISTS"),
    ("exists", "EXISTS"),
    ("is valid", "VALID"),
    ("is authenticated", "AUTH_TRUE"),
];

fn condition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:if|when) ([\w\s]+) (is missing|does not exist|exists|is valid|is authenticated)",
        )
        .expect("condition regex must compile")
    })
}

/// Find an `if|when SUBJECT PREDICATE` clause and normalize it to
/// `SUBJECT_PREDICATE`, e.g. `when user does not exist` → `USER_NOT_EXISTS`.
///
/// Returns `None` for unconditional observations.
#[must_use]
pub fn extract_condition(observation: &str) -> Option<String> {
    let caps = condition_re().captures(observation)?;
    let subject = caps[1].trim().replace(' ', "_").to_uppercase();
    let phrase = caps[2].to_lowercase();
    let predicate = PREDICATES
        .iter()
        .find(|(p, _)| *p == phrase)
        .map_or("UNKNOWN", |(_, token)| *token);
    Some(format!("{subject}_{predicate}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("returns HTTP 404 when user does not exist", Some("USER_NOT_EXISTS"))]
    #[case("returns 400 if the token is missing", Some("THE_TOKEN_NOT_EXISTS"))]
    #[case("returns 201 when order data is valid", Some("ORDER_DATA_VALID"))]
    #[case("returns 200 When Caller Is Authenticated", Some("CALLER_AUTH_TRUE"))]
    #[case("returns 409 if email exists", Some("EMAIL_EXISTS"))]
    #[case("returns HTTP 200", None)]
    #[case("observed HTTP 201 in test", None)]
    fn extracts(#[case] observation: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_condition(observation).as_deref(), expected);
    }
}
