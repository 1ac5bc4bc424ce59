//! Extractors run against realistic fixture artifacts.

use pretty_assertions::assert_eq;
use rstest::rstest;
use triad_config::ExtractionConfig;
use triad_core::entities::Evidence;
use triad_core::enums::{ArtifactSource, EvidenceType};
use triad_extract::{extract_artifact, extract_readme, extract_spec, extract_tests};
use triad_semantic::{OfflineService, SectionObservation, SemanticError, SemanticService, UnitSummary};

const README: &str = include_str!("fixtures/README.md");
const OPENAPI: &str = include_str!("fixtures/openapi.yaml");
const TESTS: &str = include_str!("fixtures/test_orders.py");

fn triples(evidence: &[Evidence]) -> Vec<(String, String, String)> {
    evidence
        .iter()
        .map(|e| {
            (
                e.endpoint.clone(),
                e.observation.clone(),
                e.source_location.clone(),
            )
        })
        .collect()
}

fn t(endpoint: &str, observation: &str, location: &str) -> (String, String, String) {
    (endpoint.into(), observation.into(), location.into())
}

/// Answers with one honest and one fabricated observation per section.
struct HalfHonest;

impl SemanticService for HalfHonest {
    fn extract_section(&self, section_text: &str) -> Result<Vec<SectionObservation>, SemanticError> {
        Ok(vec![
            SectionObservation {
                endpoint: "POST /orders".into(),
                observation: "returns HTTP 201".into(),
                raw_snippet: section_text.lines().nth(4).unwrap_or_default().to_string(),
            },
            SectionObservation {
                endpoint: "DELETE /orders/{orderId}".into(),
                observation: "returns HTTP 204".into(),
                raw_snippet: "Deletes an order and returns 204.".into(),
            },
        ])
    }

    fn describe_unit(&self, _: &UnitSummary) -> Result<String, SemanticError> {
        Err(SemanticError::EmptyResponse)
    }
}

#[test]
fn readme_fallback_reads_explicit_statuses() {
    let evidence = extract_readme(
        "README.md",
        README,
        &OfflineService,
        &ExtractionConfig::default(),
    );
    assert_eq!(
        triples(&evidence),
        vec![
            t("POST /orders", "returns HTTP 201", "line 13"),
            t("POST /orders", "returns HTTP 400", "line 14"),
            t("GET /orders/{orderId}", "returns HTTP 200", "line 18"),
            t("GET /orders/{orderId}", "returns HTTP 404", "line 19"),
        ]
    );
    assert!(
        evidence
            .iter()
            .all(|e| e.kind == EvidenceType::ReadmeStatement)
    );
}

#[test]
fn readme_semantic_answers_pass_the_provenance_guard() {
    let evidence = extract_readme(
        "README.md",
        README,
        &HalfHonest,
        &ExtractionConfig::default(),
    );
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].endpoint, "POST /orders");
    assert_eq!(evidence[0].source_location, "lines 9-20");
    assert_eq!(
        evidence[0].raw_snippet.as_deref(),
        Some("Creates a new order. Returns 201 with the created order.")
    );
}

#[test]
fn openapi_fixture_traversal() {
    let evidence = extract_spec("openapi.yaml", OPENAPI);
    assert_eq!(
        triples(&evidence),
        vec![
            t(
                "POST /orders",
                "documents possible response 201: Order created",
                "paths./orders.post.responses.201"
            ),
            t(
                "POST /orders",
                "response 201 schema references #/components/schemas/Order",
                "paths./orders.post.responses.201.content.application/json.schema.$ref"
            ),
            t(
                "POST /orders",
                "documents possible response 400: Invalid order",
                "paths./orders.post.responses.400"
            ),
            t(
                "POST /orders",
                "defines request body",
                "paths./orders.post.requestBody"
            ),
            t(
                "POST /orders",
                "request body schema references #/components/schemas/NewOrder",
                "paths./orders.post.requestBody.content.application/json.schema.$ref"
            ),
            t(
                "GET /orders/{orderId}",
                "uses path-level parameter 'orderId' in path",
                "paths./orders/{orderId}.parameters[0]"
            ),
            t(
                "GET /orders/{orderId}",
                "documents possible response 200: The order",
                "paths./orders/{orderId}.get.responses.200"
            ),
            t(
                "GET /orders/{orderId}",
                "documents possible response 404: Order not found",
                "paths./orders/{orderId}.get.responses.404"
            ),
            t(
                "GET /orders/{orderId}",
                "defines security requirements",
                "paths./orders/{orderId}.get.security"
            ),
        ]
    );
}

#[test]
fn python_test_fixture() {
    let evidence = extract_tests("test_orders.py", TESTS, &ExtractionConfig::default());
    assert_eq!(
        triples(&evidence),
        vec![
            t(
                "POST /orders",
                "observed HTTP 201 in test",
                "test_create_order [line 8]"
            ),
            t(
                "POST /orders",
                "observed HTTP 400 in test",
                "test_create_order_invalid [line 13]"
            ),
            t(
                "GET /orders/{id}",
                "observed HTTP 200 in test",
                "test_get_order [line 19]"
            ),
            t(
                "GET /orders/{id}",
                "observed HTTP 404 in test",
                "test_get_missing_order [line 24]"
            ),
        ]
    );
}

#[test]
fn tighter_distance_drops_far_assertions() {
    let config = ExtractionConfig {
        max_assert_distance: 1,
        ..Default::default()
    };
    let src = "def test_x():\n    r = requests.get('/a')\n\n    assert r.status_code == 200\n";
    assert!(extract_tests("test_x.py", src, &config).is_empty());
    assert_eq!(
        extract_tests("test_x.py", src, &ExtractionConfig::default()).len(),
        1
    );
}

#[rstest]
#[case(ArtifactSource::Readme, README, 4)]
#[case(ArtifactSource::ApiSpec, OPENAPI, 9)]
#[case(ArtifactSource::Test, TESTS, 4)]
fn dispatch_by_kind(#[case] kind: ArtifactSource, #[case] content: &str, #[case] expected: usize) {
    let evidence = extract_artifact(
        kind,
        "artifact",
        content,
        &OfflineService,
        &ExtractionConfig::default(),
    );
    assert_eq!(evidence.len(), expected);
    assert!(evidence.iter().all(|e| e.source() == kind));
}

#[test]
fn extraction_is_deterministic() {
    let first = extract_spec("openapi.yaml", OPENAPI);
    let second = extract_spec("openapi.yaml", OPENAPI);
    assert_eq!(first, second);
}
