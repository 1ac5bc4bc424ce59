//! Deterministic README extraction used when the semantic collaborator fails.
//!
//! Only explicitly stated status codes are picked up, and only when an
//! explicit `METHOD /path` token sits within the search radius.

use std::sync::OnceLock;

use regex::Regex;
use triad_core::entities::Evidence;
use triad_core::enums::EvidenceType;

use super::sections::ApiSection;

fn status_patterns() -> &'static [Regex; 3] {
    static RE: OnceLock<[Regex; 3]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            Regex::new(r"(?i)returns?\s+(?:HTTP\s+)?(\d+)")
                .expect("returns status regex must compile"),
            Regex::new(r"(?i)responds?\s+with\s+(?:HTTP\s+)?(\d+)")
                .expect("responds with regex must compile"),
            Regex::new(r"(?i)status\s+code\s+(\d+)").expect("status code regex must compile"),
        ]
    })
}

fn endpoint_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS)\s+(/[\w{}./:-]*)")
            .expect("endpoint token regex must compile")
    })
}

/// Find an explicit `METHOD /path` within `radius` lines of `index`.
///
/// The line itself is checked first, then preceding lines nearest first,
/// then following lines nearest first: documentation usually names the
/// endpoint above the behavior it describes.
fn endpoint_near(lines: &[&str], index: usize, radius: usize) -> Option<String> {
    let find = |i: usize| {
        lines.get(i).and_then(|line| {
            endpoint_token_re()
                .captures(line)
                .map(|caps| format!("{} {}", &caps[1], &caps[2]))
        })
    };

    find(index)
        .or_else(|| (1..=radius).find_map(|d| index.checked_sub(d).and_then(find)))
        .or_else(|| (1..=radius).find_map(|d| find(index + d)))
}

/// Extract status statements from one section without the collaborator.
#[must_use]
pub fn extract_fallback(section: &ApiSection, source_file: &str, radius: usize) -> Vec<Evidence> {
    let lines: Vec<&str> = section.text.split('\n').collect();
    let mut evidence = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        for pattern in status_patterns() {
            for caps in pattern.captures_iter(line) {
                let Some(endpoint) = endpoint_near(&lines, i, radius) else {
                    continue;
                };
                evidence.push(Evidence {
                    kind: EvidenceType::ReadmeStatement,
                    endpoint,
                    observation: format!("returns HTTP {}", &caps[1]),
                    source_file: source_file.to_string(),
                    source_location: format!("line {}", section.start_line + i),
                    raw_snippet: Some(line.trim().to_string()),
                });
            }
        }
    }

    evidence
}
