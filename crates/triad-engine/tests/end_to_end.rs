//! Full runs over small artifact sets with a stubbed semantic collaborator.

use pretty_assertions::assert_eq;
use triad_config::TriadConfig;
use triad_core::enums::{ArtifactSource, FindingKind, RejectionPhase, RiskLevel};
use triad_engine::{Artifact, Pipeline, PipelineOptions, ProcessingStats};
use triad_semantic::{
    OfflineService, SectionObservation, SemanticError, SemanticService, UnitSummary,
};

const README: &str = "# Orders\n\nPlace and track orders.\n\n## API\n\nPOST /orders returns 200 with the new order.\n";

const SPEC: &str = r#"openapi: 3.0.0
info:
  title: Orders
  version: "1.0"
paths:
  /orders:
    post:
      responses:
        "201":
          description: Order created
"#;

const TESTS: &str = r#"def test_create_order():
    response = client.post("/orders", json={"item": "book"})
    assert response.status_code == 201
"#;

/// Answers every section with one observation carrying `snippet`.
struct Stub {
    snippet: &'static str,
}

impl SemanticService for Stub {
    fn extract_section(&self, _: &str) -> Result<Vec<SectionObservation>, SemanticError> {
        Ok(vec![SectionObservation {
            endpoint: "POST /orders".into(),
            observation: "returns 200".into(),
            raw_snippet: self.snippet.into(),
        }])
    }

    fn describe_unit(&self, unit: &UnitSummary) -> Result<String, SemanticError> {
        Ok(format!("{} disagrees across sources.", unit.endpoint))
    }
}

static HONEST: Stub = Stub {
    snippet: "POST /orders returns 200",
};

fn artifacts() -> Vec<Artifact> {
    vec![
        Artifact::new(ArtifactSource::Readme, "README.md", README),
        Artifact::new(ArtifactSource::ApiSpec, "openapi.yaml", SPEC),
        Artifact::new(ArtifactSource::Test, "test_orders.py", TESTS),
    ]
}

#[test]
fn three_way_disagreement_is_one_critical_unit() {
    let config = TriadConfig::default();
    let result = Pipeline::new(&config, &HONEST)
        .run(&artifacts())
        .expect("run");

    let display = &result.display;
    assert_eq!(display.total_behaviors(), 1);
    let unit = &display.behavioral_units[0];
    assert_eq!(unit.endpoint, "POST /orders");
    assert!(unit.assertion_state.has_conflicts);
    assert!(unit.has_warning(FindingKind::Contradiction));
    assert!((unit.coverage_score - 1.0).abs() < f64::EPSILON);
    assert_eq!(unit.risk_band, RiskLevel::Critical);
    assert_eq!(
        unit.semantic_description.as_deref(),
        Some("POST /orders disagrees across sources.")
    );

    assert_eq!(
        result.stats,
        ProcessingStats {
            artifacts: 3,
            evidence: 3,
            claims: 3,
            rejections: 4,
            buckets: 1,
            behavioral_units: 1,
        }
    );
    assert!(
        result
            .rejections
            .iter()
            .all(|r| r.phase == RejectionPhase::Assertion)
    );
}

#[test]
fn offline_run_falls_back_and_omits_narration() {
    let config = TriadConfig::default();
    let result = Pipeline::new(&config, &OfflineService)
        .run(&artifacts())
        .expect("run");

    let unit = &result.display.behavioral_units[0];
    assert!(unit.assertion_state.has_conflicts);
    assert_eq!(unit.semantic_description, None);
    let readme_claim = unit
        .claims
        .iter()
        .find(|c| c.source == ArtifactSource::Readme)
        .expect("fallback produced README evidence");
    assert_eq!(readme_claim.assertion, "OUT_HTTP_200");
}

#[test]
fn fabricated_snippet_never_becomes_evidence() {
    let config = TriadConfig::default();
    let liar = Stub {
        snippet: "POST /orders always returns 200",
    };
    let result = Pipeline::new(&config, &liar).run(&artifacts()).expect("run");

    let unit = &result.display.behavioral_units[0];
    assert!(!unit.source_coverage.readme);
    assert!(!unit.assertion_state.has_conflicts);
    assert_eq!(unit.assertion_state.canonical_assertion(), Some("OUT_HTTP_201"));
    assert_eq!(result.stats.evidence, 2);
}

#[test]
fn narration_can_be_switched_off() {
    let mut config = TriadConfig::default();
    config.semantic.narrate = false;
    let result = Pipeline::new(&config, &HONEST)
        .run(&artifacts())
        .expect("run");
    assert_eq!(result.display.behavioral_units[0].semantic_description, None);
}

#[test]
fn reruns_are_byte_identical() {
    let config = TriadConfig::default();
    let pipeline = Pipeline::new(&config, &HONEST);
    let first = serde_json::to_string(&pipeline.run(&artifacts()).expect("run")).expect("json");
    let second = serde_json::to_string(&pipeline.run(&artifacts()).expect("run")).expect("json");
    assert_eq!(first, second);
}

#[test]
fn parallel_run_matches_sequential() {
    let config = TriadConfig::default();
    let sequential = Pipeline::new(&config, &HONEST)
        .run(&artifacts())
        .expect("run");
    let parallel = Pipeline::new(&config, &HONEST)
        .with_options(PipelineOptions { parallel: true })
        .run(&artifacts())
        .expect("run");
    assert_eq!(sequential, parallel);
}

#[test]
fn claims_only_run_reports_evidence_and_rejections() {
    let config = TriadConfig::default();
    let report = Pipeline::new(&config, &HONEST)
        .claims(&artifacts())
        .expect("claims");
    assert_eq!(report.evidence.len(), 3);
    assert_eq!(report.claims.claims.len(), 3);
    assert_eq!(report.claims.rejections.len(), 4);

    let value = serde_json::to_value(&report).expect("json");
    assert!(value["claims"].is_array());
    assert!(value["rejections"].is_array());
    assert_eq!(value["evidence"][0]["type"], "readme_statement");
}

#[test]
fn grouping_invariant_holds_across_units() {
    let config = TriadConfig::default();
    let mut artifacts = artifacts();
    artifacts.push(Artifact::new(
        ArtifactSource::Test,
        "test_more.py",
        "def test_missing():\n    r = client.get(\"/orders/7\")\n    assert r.status_code == 404\n",
    ));
    let result = Pipeline::new(&config, &HONEST).run(&artifacts).expect("run");

    let units = &result.display.behavioral_units;
    for (i, a) in units.iter().enumerate() {
        for claim in &a.claims {
            assert_eq!(claim.endpoint, a.endpoint);
            assert_eq!(claim.category, a.category);
            assert_eq!(claim.condition, a.condition);
        }
        for b in &units[i + 1..] {
            assert!(
                (a.endpoint.as_str(), a.category, a.condition.as_deref())
                    != (b.endpoint.as_str(), b.category, b.condition.as_deref())
            );
        }
    }
}
