//! Fact derivation per comparison-key bucket.
//!
//! The analyzer never ranks, filters, or judges. Every finding is an
//! order-independent statement about which claims and sources a bucket holds.

use std::sync::OnceLock;

use regex::Regex;
use triad_core::CoreError;
use triad_core::entities::{AnalysisObject, AssertionGroup, Claim, Finding, FindingDetails};
use triad_core::enums::{ArtifactSource, FindingKind};

use crate::grouping::group_claims;

fn success_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^OUT_HTTP_2\d{2}").expect("success token regex must compile"))
}

// ── Detectors ──────────────────────────────────────────────────────

fn multiple_success_variants(bucket: &[Claim]) -> Option<Finding> {
    let mut variants: Vec<String> = bucket
        .iter()
        .map(|c| c.assertion.as_str())
        .filter(|a| success_token_re().is_match(a))
        .map(String::from)
        .collect();
    variants.sort();
    variants.dedup();
    if variants.len() < 2 {
        return None;
    }

    let related = bucket
        .iter()
        .filter(|c| variants.contains(&c.assertion))
        .cloned()
        .collect();
    Some(
        Finding::new(
            FindingKind::MultipleSuccessVariants,
            format!(
                "Multiple success code variants present: {}",
                variants.join(", ")
            ),
            related,
        )
        .with_details(FindingDetails::SuccessVariants { variants }),
    )
}

fn confidence_spread(bucket: &[Claim]) -> Option<Finding> {
    if bucket.len() < 2 {
        return None;
    }
    let min = bucket.iter().map(|c| c.confidence).fold(f64::INFINITY, f64::min);
    let max = bucket
        .iter()
        .map(|c| c.confidence)
        .fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;
    Some(
        Finding::new(
            FindingKind::ConfidenceSpread,
            format!("Confidence range: {min:.2} to {max:.2} (spread: {spread:.2})"),
            bucket.to_vec(),
        )
        .with_details(FindingDetails::ConfidenceSpread {
            min_confidence: min,
            max_confidence: max,
            spread,
        }),
    )
}

/// Distinct assertions in first-seen order, each with its distinct sources.
fn assertion_groups(bucket: &[Claim]) -> Vec<AssertionGroup> {
    let mut groups: Vec<AssertionGroup> = Vec::new();
    for claim in bucket {
        match groups.iter_mut().find(|g| g.assertion == claim.assertion) {
            Some(group) => {
                if !group.sources.contains(&claim.source) {
                    group.sources.push(claim.source);
                }
            }
            None => groups.push(AssertionGroup {
                assertion: claim.assertion.clone(),
                sources: vec![claim.source],
            }),
        }
    }
    groups
}

fn contradiction(bucket: &[Claim]) -> Option<Finding> {
    let groups = assertion_groups(bucket);
    if groups.len() < 2 {
        return None;
    }
    let names: Vec<&str> = groups.iter().map(|g| g.assertion.as_str()).collect();
    Some(
        Finding::new(
            FindingKind::Contradiction,
            format!("Multiple distinct assertions: {}", names.join(", ")),
            bucket.to_vec(),
        )
        .with_details(FindingDetails::AssertionGroups {
            assertion_groups: groups,
        }),
    )
}

/// Source-presence facts: one `MISSING_*` per absent source, then the two
/// source-pattern facts.
fn presence(bucket: &[Claim], sources: &[ArtifactSource]) -> Vec<Finding> {
    let has = |source| sources.contains(&source);
    let mut findings = Vec::new();

    for (source, kind, description) in [
        (
            ArtifactSource::Test,
            FindingKind::MissingTests,
            "No test artifacts assert this behavior",
        ),
        (
            ArtifactSource::ApiSpec,
            FindingKind::MissingSpec,
            "No API specification artifacts assert this behavior",
        ),
        (
            ArtifactSource::Readme,
            FindingKind::MissingReadme,
            "No README documentation asserts this behavior",
        ),
    ] {
        if !has(source) {
            findings.push(Finding::new(kind, description, bucket.to_vec()));
        }
    }

    if sources == [ArtifactSource::Test] {
        findings.push(Finding::new(
            FindingKind::ImplementationOnly,
            "Behavior asserted only in test artifacts",
            bucket.to_vec(),
        ));
    }
    if !has(ArtifactSource::Test) && (has(ArtifactSource::Readme) || has(ArtifactSource::ApiSpec)) {
        findings.push(Finding::new(
            FindingKind::DocumentationOnly,
            "Behavior asserted only in documentation artifacts",
            bucket.to_vec(),
        ));
    }
    findings
}

// ── Public API ─────────────────────────────────────────────────────

/// Derive every structural fact about one bucket of same-key claims.
///
/// # Errors
///
/// Returns [`CoreError::EmptyBucket`] for an empty bucket and
/// [`CoreError::Validation`] if the claims do not share one comparison key.
pub fn analyse_bucket(bucket: Vec<Claim>) -> Result<AnalysisObject, CoreError> {
    let Some(first) = bucket.first() else {
        return Err(CoreError::EmptyBucket {
            endpoint: String::new(),
        });
    };
    let key = first.comparison_key();
    if let Some(stray) = bucket.iter().find(|c| c.comparison_key() != key) {
        return Err(CoreError::Validation(format!(
            "claim for {} {} mixed into bucket {} {}",
            stray.endpoint, stray.category, key.endpoint, key.category
        )));
    }

    let mut findings = Vec::new();
    findings.extend(multiple_success_variants(&bucket));
    findings.extend(confidence_spread(&bucket));
    if bucket.len() == 1 {
        findings.push(Finding::new(
            FindingKind::Unverified,
            "Single artifact source for this behavior",
            bucket.clone(),
        ));
    }
    findings.extend(contradiction(&bucket));

    let mut analysis = AnalysisObject {
        endpoint: key.endpoint,
        category: key.category,
        condition: key.condition,
        claims: bucket,
        findings,
    };
    let sources = analysis.sources();
    analysis
        .findings
        .extend(presence(&analysis.claims, &sources));
    tracing::trace!(
        endpoint = %analysis.endpoint,
        category = %analysis.category,
        findings = analysis.findings.len(),
        "bucket analysed"
    );
    Ok(analysis)
}

/// Group claims and analyse every bucket, preserving first-seen bucket order.
///
/// # Errors
///
/// Propagates [`analyse_bucket`] failures.
pub fn analyse_claims(claims: Vec<Claim>) -> Result<Vec<AnalysisObject>, CoreError> {
    group_claims(claims).into_iter().map(analyse_bucket).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use triad_core::enums::ClaimCategory;

    fn claim(assertion: &str, source: ArtifactSource, confidence: f64) -> Claim {
        Claim::new(
            ClaimCategory::OutputGuarantee,
            "GET /users/{id}",
            None,
            assertion,
            source,
            confidence,
        )
        .expect("valid claim")
    }

    fn kinds(analysis: &AnalysisObject) -> Vec<FindingKind> {
        analysis.findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn single_test_claim() {
        let analysis =
            analyse_bucket(vec![claim("OUT_HTTP_200", ArtifactSource::Test, 0.9)]).expect("bucket");
        assert_eq!(
            kinds(&analysis),
            vec![
                FindingKind::Unverified,
                FindingKind::MissingSpec,
                FindingKind::MissingReadme,
                FindingKind::ImplementationOnly,
            ]
        );
    }

    #[test]
    fn test_and_spec_disagree() {
        let analysis = analyse_bucket(vec![
            claim("OUT_HTTP_200", ArtifactSource::Test, 0.9),
            claim("OUT_HTTP_201", ArtifactSource::ApiSpec, 0.9),
        ])
        .expect("bucket");

        assert_eq!(
            kinds(&analysis),
            vec![
                FindingKind::MultipleSuccessVariants,
                FindingKind::ConfidenceSpread,
                FindingKind::Contradiction,
                FindingKind::MissingReadme,
            ]
        );
        let contradiction = &analysis.findings[2];
        assert_eq!(
            contradiction.description,
            "Multiple distinct assertions: OUT_HTTP_200, OUT_HTTP_201"
        );
        assert_eq!(
            contradiction.details,
            Some(FindingDetails::AssertionGroups {
                assertion_groups: vec![
                    AssertionGroup {
                        assertion: "OUT_HTTP_200".into(),
                        sources: vec![ArtifactSource::Test],
                    },
                    AssertionGroup {
                        assertion: "OUT_HTTP_201".into(),
                        sources: vec![ArtifactSource::ApiSpec],
                    },
                ],
            })
        );
    }

    #[test]
    fn spread_reports_min_and_max() {
        let analysis = analyse_bucket(vec![
            claim("OUT_HTTP_200", ArtifactSource::Readme, 0.7),
            claim("OUT_HTTP_200", ArtifactSource::Test, 0.9),
        ])
        .expect("bucket");
        let spread = analysis
            .findings
            .iter()
            .find(|f| f.kind == FindingKind::ConfidenceSpread)
            .expect("spread finding");
        assert_eq!(spread.description, "Confidence range: 0.70 to 0.90 (spread: 0.20)");
        assert!(!analysis.has_finding(FindingKind::Contradiction));
    }

    #[test]
    fn documentation_only_without_tests() {
        let analysis = analyse_bucket(vec![
            claim("OUT_HTTP_200", ArtifactSource::Readme, 0.7),
            claim("OUT_HTTP_200", ArtifactSource::ApiSpec, 0.9),
        ])
        .expect("bucket");
        assert!(analysis.has_finding(FindingKind::DocumentationOnly));
        assert!(analysis.has_finding(FindingKind::MissingTests));
        assert!(!analysis.has_finding(FindingKind::ImplementationOnly));
    }

    #[test]
    fn error_tokens_are_not_success_variants() {
        let bucket = vec![
            claim("OUT_HTTP_404", ArtifactSource::Test, 0.9),
            claim("OUT_HTTP_200", ArtifactSource::ApiSpec, 0.9),
        ];
        assert!(multiple_success_variants(&bucket).is_none());
    }

    #[test]
    fn empty_bucket_is_an_error() {
        assert!(matches!(
            analyse_bucket(Vec::new()),
            Err(CoreError::EmptyBucket { .. })
        ));
    }

    #[test]
    fn mixed_keys_are_rejected() {
        let mut other = claim("OUT_HTTP_200", ArtifactSource::Test, 0.9);
        other.endpoint = "GET /other".into();
        let result = analyse_bucket(vec![claim("OUT_HTTP_200", ArtifactSource::Test, 0.9), other]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
}
