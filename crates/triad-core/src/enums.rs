//! Artifact sources, evidence types, claim categories, finding kinds, and risk levels.
//!
//! All enums serialize in `snake_case` except the rejection vocabulary, which keeps
//! the upper-case audit tokens (`P0_ADMISSION`, `MALFORMED_ENDPOINT_IDENTITY`, ...)
//! so rejection logs can be grepped across runs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ArtifactSource
// ---------------------------------------------------------------------------

/// The kind of artifact a claim was read from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactSource {
    Readme,
    ApiSpec,
    Test,
    Code,
}

impl ArtifactSource {
    /// The three artifact kinds that count toward coverage.
    pub const RECOGNIZED: [Self; 3] = [Self::Readme, Self::ApiSpec, Self::Test];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Readme => "readme",
            Self::ApiSpec => "api_spec",
            Self::Test => "test",
            Self::Code => "code",
        }
    }

    /// Upper-case label used in text reports (`TEST`, `API_SPEC`, `README`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Readme => "README",
            Self::ApiSpec => "API_SPEC",
            Self::Test => "TEST",
            Self::Code => "CODE",
        }
    }
}

impl fmt::Display for ArtifactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EvidenceType
// ---------------------------------------------------------------------------

/// What kind of literal observation an [`Evidence`](crate::entities::Evidence) records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    TestAssertion,
    SpecResponse,
    SpecParameter,
    SpecSchemaRef,
    SpecRequestBody,
    SpecSecurity,
    ReadmeStatement,
}

impl EvidenceType {
    /// The artifact source every evidence type is read from.
    #[must_use]
    pub const fn source(self) -> ArtifactSource {
        match self {
            Self::ReadmeStatement => ArtifactSource::Readme,
            Self::SpecResponse
            | Self::SpecParameter
            | Self::SpecSchemaRef
            | Self::SpecRequestBody
            | Self::SpecSecurity => ArtifactSource::ApiSpec,
            Self::TestAssertion => ArtifactSource::Test,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TestAssertion => "test_assertion",
            Self::SpecResponse => "spec_response",
            Self::SpecParameter => "spec_parameter",
            Self::SpecSchemaRef => "spec_schema_ref",
            Self::SpecRequestBody => "spec_request_body",
            Self::SpecSecurity => "spec_security",
            Self::ReadmeStatement => "readme_statement",
        }
    }
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ClaimCategory
// ---------------------------------------------------------------------------

/// Semantic namespace of a claim. The category decides which assertion
/// vocabulary (`OUT_*`, `ERR_*`, `PRE_*`) an observation is canonicalized into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ClaimCategory {
    EndpointExists,
    InputPrecondition,
    OutputGuarantee,
    ErrorSemantics,
    Idempotency,
}

impl ClaimCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EndpointExists => "endpoint_exists",
            Self::InputPrecondition => "input_precondition",
            Self::OutputGuarantee => "output_guarantee",
            Self::ErrorSemantics => "error_semantics",
            Self::Idempotency => "idempotency",
        }
    }
}

impl fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FindingKind
// ---------------------------------------------------------------------------

/// A structural fact about one claim bucket. Carries no severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Contradiction,
    Unverified,
    MultipleSuccessVariants,
    ConfidenceSpread,
    MissingTests,
    MissingSpec,
    MissingReadme,
    ImplementationOnly,
    DocumentationOnly,
}

impl FindingKind {
    /// Kinds surfaced as tier-2 structural warnings on a unit card.
    pub const STRUCTURAL: [Self; 5] = [
        Self::Contradiction,
        Self::DocumentationOnly,
        Self::ImplementationOnly,
        Self::Unverified,
        Self::MultipleSuccessVariants,
    ];

    #[must_use]
    pub fn is_structural(self) -> bool {
        Self::STRUCTURAL.contains(&self)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contradiction => "contradiction",
            Self::Unverified => "unverified",
            Self::MultipleSuccessVariants => "multiple_success_variants",
            Self::ConfidenceSpread => "confidence_spread",
            Self::MissingTests => "missing_tests",
            Self::MissingSpec => "missing_spec",
            Self::MissingReadme => "missing_readme",
            Self::ImplementationOnly => "implementation_only",
            Self::DocumentationOnly => "documentation_only",
        }
    }

    /// Upper-case label used in text reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contradiction => "CONTRADICTION",
            Self::Unverified => "UNVERIFIED",
            Self::MultipleSuccessVariants => "MULTIPLE_SUCCESS_VARIANTS",
            Self::ConfidenceSpread => "CONFIDENCE_SPREAD",
            Self::MissingTests => "MISSING_TESTS",
            Self::MissingSpec => "MISSING_SPEC",
            Self::MissingReadme => "MISSING_README",
            Self::ImplementationOnly => "IMPLEMENTATION_ONLY",
            Self::DocumentationOnly => "DOCUMENTATION_ONLY",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Heuristic risk classification of a claim bucket.
///
/// ```text
/// critical > high > medium > low
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Ordering weight; larger is worse.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rejection vocabulary
// ---------------------------------------------------------------------------

/// Claim-generation phase that refused an evidence item or skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RejectionPhase {
    #[serde(rename = "P0_ADMISSION")]
    Admission,
    #[serde(rename = "P2_ASSERTION")]
    Assertion,
}

impl RejectionPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admission => "P0_ADMISSION",
            Self::Assertion => "P2_ASSERTION",
        }
    }
}

impl fmt::Display for RejectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a rejection happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    EmptyEndpoint,
    MalformedEndpointIdentity,
    UnmappableObservation,
}

impl RejectionReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyEndpoint => "EMPTY_ENDPOINT",
            Self::MalformedEndpointIdentity => "MALFORMED_ENDPOINT_IDENTITY",
            Self::UnmappableObservation => "UNMAPPABLE_OBSERVATION",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_types_map_to_their_artifact() {
        assert_eq!(EvidenceType::ReadmeStatement.source(), ArtifactSource::Readme);
        assert_eq!(EvidenceType::TestAssertion.source(), ArtifactSource::Test);
        for spec_type in [
            EvidenceType::SpecResponse,
            EvidenceType::SpecParameter,
            EvidenceType::SpecSchemaRef,
            EvidenceType::SpecRequestBody,
            EvidenceType::SpecSecurity,
        ] {
            assert_eq!(spec_type.source(), ArtifactSource::ApiSpec);
        }
    }

    #[test]
    fn structural_kinds_exclude_presence_facts() {
        assert!(FindingKind::Contradiction.is_structural());
        assert!(FindingKind::Unverified.is_structural());
        assert!(!FindingKind::MissingTests.is_structural());
        assert!(!FindingKind::ConfidenceSpread.is_structural());
    }

    #[test]
    fn risk_rank_orders_critical_highest() {
        assert!(RiskLevel::Critical.rank() > RiskLevel::High.rank());
        assert!(RiskLevel::High.rank() > RiskLevel::Medium.rank());
        assert!(RiskLevel::Medium.rank() > RiskLevel::Low.rank());
    }

    #[test]
    fn serde_tokens_match_as_str() {
        assert_eq!(
            serde_json::to_string(&ArtifactSource::ApiSpec).unwrap(),
            "\"api_spec\""
        );
        assert_eq!(
            serde_json::to_string(&RejectionPhase::Admission).unwrap(),
            "\"P0_ADMISSION\""
        );
        assert_eq!(
            serde_json::to_string(&RejectionReason::MalformedEndpointIdentity).unwrap(),
            "\"MALFORMED_ENDPOINT_IDENTITY\""
        );
        assert_eq!(
            serde_json::to_string(&FindingKind::MultipleSuccessVariants).unwrap(),
            "\"multiple_success_variants\""
        );
    }
}
