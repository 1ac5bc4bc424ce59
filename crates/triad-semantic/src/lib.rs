//! # triad-semantic
//!
//! The semantic collaborator: a generative model used at exactly two points
//! of the pipeline.
//!
//! - README section extraction: section text in, `{endpoint, observation,
//!   raw_snippet}` triples out. Callers must still apply the provenance guard.
//! - Unit narration: a structured summary of one behavioral unit in, free
//!   text out. Enrichment only.
//!
//! The capability is the [`SemanticService`] trait so the pipeline can be
//! driven by [`GeminiClient`], [`OfflineService`], or a test stub.

pub mod gemini;
pub mod prompts;

mod error;
mod http;
mod response;

pub use error::SemanticError;
pub use gemini::GeminiClient;
pub use response::parse_observations;

use serde::{Deserialize, Serialize};
use triad_core::enums::{ArtifactSource, FindingKind, RiskLevel};

// ── Types ──────────────────────────────────────────────────────────

/// One literal statement the collaborator found in a README section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionObservation {
    /// Endpoint as written by the model, e.g. `GET /users/{id}`.
    pub endpoint: String,
    /// Behavior, e.g. `returns HTTP 404 when user not found`.
    pub observation: String,
    /// Text the model claims to have copied verbatim from the section.
    pub raw_snippet: String,
}

/// One assertion of a unit, with the artifact kinds asserting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionSummary {
    pub assertion: String,
    pub sources: Vec<ArtifactSource>,
}

/// Which recognized artifact kinds contributed to a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub test: bool,
    pub api_spec: bool,
    pub readme: bool,
}

/// Narration request payload for one behavioral unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSummary {
    pub endpoint: String,
    pub condition: Option<String>,
    pub assertions: Vec<AssertionSummary>,
    pub has_conflicts: bool,
    pub source_coverage: CoverageSummary,
    pub structural_warnings: Vec<FindingKind>,
    pub risk_level: RiskLevel,
    pub confidence_score: f64,
}

// ── Capability ─────────────────────────────────────────────────────

/// Injected semantic collaborator.
///
/// Implementations must be synchronous and enforce their own timeout. Any
/// error is treated by callers as an ordinary failure: never escalated.
pub trait SemanticService: Send + Sync {
    /// Extract literal API statements from one README section.
    ///
    /// # Errors
    ///
    /// Returns [`SemanticError`] when the call fails or the reply is not a
    /// list of observations.
    fn extract_section(&self, section_text: &str) -> Result<Vec<SectionObservation>, SemanticError>;

    /// Produce a short narrative for one behavioral unit.
    ///
    /// # Errors
    ///
    /// Returns [`SemanticError`] when the call fails or yields no text.
    fn describe_unit(&self, unit: &UnitSummary) -> Result<String, SemanticError>;
}

/// A collaborator that is never available.
///
/// Drives README extraction onto the deterministic fallback and leaves every
/// `semantic_description` empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineService;

impl SemanticService for OfflineService {
    fn extract_section(&self, _section_text: &str) -> Result<Vec<SectionObservation>, SemanticError> {
        Err(SemanticError::Unavailable("offline mode".into()))
    }

    fn describe_unit(&self, _unit: &UnitSummary) -> Result<String, SemanticError> {
        Err(SemanticError::Unavailable("offline mode".into()))
    }
}

/// Pick the collaborator for a run: Gemini when configured, offline otherwise.
///
/// A client that fails to build is logged and replaced by [`OfflineService`].
#[must_use]
pub fn from_config(config: &triad_config::SemanticConfig) -> Box<dyn SemanticService> {
    if !config.is_configured() {
        tracing::debug!("semantic service not configured, running offline");
        return Box::new(OfflineService);
    }
    match GeminiClient::new(config) {
        Ok(client) => Box::new(client),
        Err(e) => {
            tracing::warn!(%e, "failed to build semantic client, running offline");
            Box::new(OfflineService)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_service_is_always_unavailable() {
        let service = OfflineService;
        assert!(matches!(
            service.extract_section("## API"),
            Err(SemanticError::Unavailable(_))
        ));
    }

    #[test]
    fn unconfigured_config_yields_offline_service() {
        let service = from_config(&triad_config::SemanticConfig::default());
        assert!(service.extract_section("anything").is_err());
    }

    #[test]
    fn unit_summary_serializes_enum_tokens() {
        let summary = UnitSummary {
            endpoint: "POST /orders".into(),
            condition: None,
            assertions: vec![AssertionSummary {
                assertion: "OUT_HTTP_201".into(),
                sources: vec![ArtifactSource::ApiSpec, ArtifactSource::Test],
            }],
            has_conflicts: false,
            source_coverage: CoverageSummary {
                test: true,
                api_spec: true,
                readme: false,
            },
            structural_warnings: vec![FindingKind::Unverified],
            risk_level: RiskLevel::Medium,
            confidence_score: 0.95,
        };
        let value = serde_json::to_value(&summary).expect("serializes");
        assert_eq!(value["assertions"][0]["sources"][0], "api_spec");
        assert_eq!(value["structural_warnings"][0], "unverified");
        assert_eq!(value["risk_level"], "medium");
    }
}
