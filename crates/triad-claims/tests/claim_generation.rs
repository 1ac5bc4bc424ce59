//! Generator properties across mixed evidence batches.

use pretty_assertions::assert_eq;
use triad_claims::{ClaimGenerator, categories_for};
use triad_core::entities::Evidence;
use triad_core::enums::{ClaimCategory, EvidenceType, RejectionPhase};

fn ev(kind: EvidenceType, endpoint: &str, observation: &str, location: &str) -> Evidence {
    Evidence {
        kind,
        endpoint: endpoint.into(),
        observation: observation.into(),
        source_file: "artifact".into(),
        source_location: location.into(),
        raw_snippet: None,
    }
}

fn mixed_batch() -> Vec<Evidence> {
    vec![
        ev(EvidenceType::ReadmeStatement, "GET /users/{userId}", "returns HTTP 200", "line 3"),
        ev(
            EvidenceType::ReadmeStatement,
            "GET /users/{userId}",
            "responds with HTTP 404 when user does not exist",
            "line 4",
        ),
        ev(EvidenceType::ReadmeStatement, "POST /users", "requires authentication", "line 9"),
        ev(
            EvidenceType::SpecResponse,
            "GET /users/{userId}",
            "documents possible response 404: User not found",
            "paths./users/{userId}.get.responses.404",
        ),
        ev(
            EvidenceType::SpecSchemaRef,
            "GET /users/{userId}",
            "response 200 schema references #/components/schemas/User",
            "paths./users/{userId}.get.responses.200.content.application/json.schema",
        ),
        ev(
            EvidenceType::SpecParameter,
            "GET /users/{userId}",
            "defines parameter 'userId' in path",
            "paths./users/{userId}.get.parameters[0]",
        ),
        ev(
            EvidenceType::SpecRequestBody,
            "POST /users",
            "defines request body",
            "paths./users.post.requestBody",
        ),
        ev(
            EvidenceType::SpecSecurity,
            "POST /users",
            "defines security requirements",
            "paths./users.post.security",
        ),
        ev(EvidenceType::TestAssertion, "post /users", "observed HTTP 201 in test", "test_create [line 7]"),
        ev(EvidenceType::TestAssertion, "users", "observed HTTP 500 in test", "test_broken [line 2]"),
    ]
}

#[test]
fn every_claim_uses_its_category_namespace() {
    let set = ClaimGenerator::default()
        .generate(&mixed_batch())
        .expect("valid config");
    assert!(!set.claims.is_empty());
    for claim in &set.claims {
        let prefix = match claim.category {
            ClaimCategory::OutputGuarantee => "OUT_",
            ClaimCategory::ErrorSemantics => "ERR_",
            ClaimCategory::InputPrecondition => "PRE_",
            other => panic!("unexpected category {other}"),
        };
        assert!(
            claim.assertion.starts_with(prefix),
            "{} claim carries {}",
            claim.category,
            claim.assertion
        );
    }
}

#[test]
fn every_claim_endpoint_is_canonical() {
    let set = ClaimGenerator::default()
        .generate(&mixed_batch())
        .expect("valid config");
    for claim in &set.claims {
        assert!(!claim.endpoint.contains("{userId}"));
        let (method, path) = claim.endpoint.split_once(' ').expect("METHOD /path");
        assert_eq!(method, method.to_uppercase());
        assert!(path.starts_with('/'));
    }
}

#[test]
fn skeletons_are_either_claims_or_rejections() {
    let batch = mixed_batch();
    let set = ClaimGenerator::default().generate(&batch).expect("valid config");

    let admitted_out: Vec<_> = set
        .rejections
        .iter()
        .filter(|r| r.phase == RejectionPhase::Admission)
        .collect();
    assert_eq!(admitted_out.len(), 1);
    assert_eq!(admitted_out[0].evidence_id, "artifact:test_broken [line 2]");
    let admission_rejections = admitted_out.len();

    // Every admitted item spawns exactly one outcome per category.
    let spawned: usize = batch
        .iter()
        .filter(|e| e.endpoint.starts_with(['G', 'P', 'p']))
        .map(|e| categories_for(e.kind).len())
        .sum();
    let assertion_rejections = set.rejections.len() - admission_rejections;
    assert_eq!(set.claims.len() + assertion_rejections, spawned);
}

#[test]
fn readme_and_spec_404s_share_an_assertion() {
    let set = ClaimGenerator::default()
        .generate(&mixed_batch())
        .expect("valid config");
    let errors: Vec<_> = set
        .claims
        .iter()
        .filter(|c| c.category == ClaimCategory::ErrorSemantics)
        .map(|c| (c.assertion.as_str(), c.condition.as_deref()))
        .collect();
    assert!(errors.contains(&("ERR_HTTP_404", Some("USER_NOT_EXISTS"))));
    assert!(errors.contains(&("ERR_HTTP_404", None)));
}

#[test]
fn generation_is_deterministic() {
    let batch = mixed_batch();
    let generator = ClaimGenerator::default();
    let first = generator.generate(&batch).expect("valid config");
    let second = generator.generate(&batch).expect("valid config");
    assert_eq!(
        serde_json::to_string(&first).expect("serializable"),
        serde_json::to_string(&second).expect("serializable")
    );
}
