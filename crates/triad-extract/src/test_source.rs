//! Test-source evidence extraction.
//!
//! A line scanner with one context per test function. Inside a test, a
//! request call sets the current endpoint; a status assertion within
//! `max_assert_distance` lines of that call is attributed to it, after which
//! the endpoint is cleared so the next assertion needs its own request.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use triad_config::ExtractionConfig;
use triad_core::entities::Evidence;
use triad_core::enums::EvidenceType;

use crate::paths::normalize_path;

// ── Patterns ───────────────────────────────────────────────────────

/// Test function boundaries whose first capture is the test name.
fn test_def_patterns() -> &'static [Regex; 3] {
    static RE: OnceLock<[Regex; 3]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            // Python
            Regex::new(r"^(?:async\s+)?def\s+(test_[A-Za-z0-9_]+)\s*\(")
                .expect("python test regex must compile"),
            // Rust, by naming convention
            Regex::new(r"^(?:pub\s+)?(?:async\s+)?fn\s+(test_[A-Za-z0-9_]+)\s*\(")
                .expect("rust test regex must compile"),
            // Jest / Mocha
            Regex::new(r#"^(?:it|test)(?:\.only)?\s*\(\s*["'`]([^"'`]+)["'`]"#)
                .expect("js test regex must compile"),
        ]
    })
}

fn test_attribute_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#\[(?:\w+::)*test\b").expect("test attribute regex must compile")
    })
}

fn any_fn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:pub\s+)?(?:async\s+)?fn\s+([A-Za-z0-9_]+)\s*\(")
            .expect("fn regex must compile")
    })
}

/// Request calls: `(method, url)` captures.
fn request_patterns() -> &'static [Regex; 2] {
    static RE: OnceLock<[Regex; 2]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            // requests / test clients / sessions / supertest / axios
            Regex::new(
                r#"(?i)\b(?:requests|client|session|axios|agent|request\([^)]*\))\.(get|post|put|delete|patch|head|options)\(\s*f?["'`]([^"'`]+)["'`]"#,
            )
            .expect("client request regex must compile"),
            // Generic `METHOD "path"` (upper-case verb only)
            Regex::new(
                r#"\b(GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS)\b["'`]?\s*,?\s*["'`]((?:https?://[^/"'`\s]+)?/[^"'`]*)["'`]"#,
            )
            .expect("generic request regex must compile"),
        ]
    })
}

/// Status assertions whose first capture is the status code.
fn assert_patterns() -> &'static [Regex; 6] {
    static RE: OnceLock<[Regex; 6]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            Regex::new(r"assert\s+.*status(?:_code)?\s*==\s*(\d+)")
                .expect("assert regex must compile"),
            Regex::new(r"response\.status_code\s*==\s*(\d+)")
                .expect("status_code regex must compile"),
            Regex::new(r"assertEquals?\([^,]*status[^,]*,\s*(\d+)\s*\)")
                .expect("assertEqual regex must compile"),
            Regex::new(r"expect.*status.*toBe\((\d+)\)").expect("toBe regex must compile"),
            Regex::new(r"\.expect\((\d{3})\)").expect("supertest expect regex must compile"),
            Regex::new(r"assert_eq!\([^,]*status[^,]*,\s*(?:StatusCode::from_u16\()?(\d{3})")
                .expect("assert_eq regex must compile"),
        ]
    })
}

// ── Scanner ────────────────────────────────────────────────────────

struct TestContext {
    name: String,
    current_endpoint: Option<String>,
    last_request_line: Option<usize>,
}

impl TestContext {
    const fn new(name: String) -> Self {
        Self {
            name,
            current_endpoint: None,
            last_request_line: None,
        }
    }
}

struct Scanner<'a> {
    source_file: &'a str,
    max_distance: usize,
    current: Option<TestContext>,
    after_test_attribute: bool,
    seen: HashSet<(String, String, String, usize)>,
    evidence: Vec<Evidence>,
}

impl<'a> Scanner<'a> {
    fn new(source_file: &'a str, max_distance: usize) -> Self {
        Self {
            source_file,
            max_distance,
            current: None,
            after_test_attribute: false,
            seen: HashSet::new(),
            evidence: Vec::new(),
        }
    }

    fn test_boundary(&mut self, line: &str) -> Option<String> {
        if test_attribute_re().is_match(line) {
            self.after_test_attribute = true;
            return None;
        }
        if self.after_test_attribute {
            if let Some(caps) = any_fn_re().captures(line) {
                self.after_test_attribute = false;
                return Some(caps[1].to_string());
            }
        }
        test_def_patterns()
            .iter()
            .find_map(|re| re.captures(line).map(|caps| caps[1].to_string()))
    }

    fn line(&mut self, line_no: usize, raw_line: &str) {
        let line = raw_line.trim();

        if let Some(name) = self.test_boundary(line) {
            self.current = Some(TestContext::new(name));
            return;
        }
        let Some(test) = self.current.as_mut() else {
            return;
        };

        if let Some(caps) = request_patterns().iter().find_map(|re| re.captures(line)) {
            test.current_endpoint = Some(format!(
                "{} {}",
                caps[1].to_uppercase(),
                normalize_path(&caps[2])
            ));
            test.last_request_line = Some(line_no);
            // A chained assertion on the request line itself is attributed below.
        }

        let Some(endpoint) = test.current_endpoint.clone() else {
            return;
        };
        let within_reach = test
            .last_request_line
            .is_some_and(|request_line| line_no - request_line <= self.max_distance);
        if !within_reach {
            return;
        }

        let Some(status) = assert_patterns()
            .iter()
            .find_map(|re| re.captures(line).map(|caps| caps[1].to_string()))
        else {
            return;
        };

        let key = (endpoint.clone(), status.clone(), test.name.clone(), line_no);
        if self.seen.insert(key) {
            self.evidence.push(Evidence {
                kind: EvidenceType::TestAssertion,
                endpoint,
                observation: format!("observed HTTP {status} in test"),
                source_file: self.source_file.to_string(),
                source_location: format!("{} [line {line_no}]", test.name),
                raw_snippet: Some(line.to_string()),
            });
        }

        test.current_endpoint = None;
        test.last_request_line = None;
    }
}

/// Extract status-assertion evidence from one test file.
#[must_use]
pub fn extract_tests(source_file: &str, content: &str, config: &ExtractionConfig) -> Vec<Evidence> {
    let mut scanner = Scanner::new(source_file, config.max_assert_distance);
    for (idx, raw_line) in content.lines().enumerate() {
        scanner.line(idx + 1, raw_line);
    }
    tracing::debug!(
        file = source_file,
        assertions = scanner.evidence.len(),
        "scanned test source"
    );
    scanner.evidence
}
