//! The four-phase generator.
//!
//! ```text
//! Evidence ─P0 admission─► canonical endpoint
//!          ─P1 policy────► one skeleton per category
//!          ─P2 templates─► assertion token
//!          ─P3 condition─► optional condition
//!          ─P4──────────► Claim
//! ```
//!
//! Each evidence item is processed independently. Rejections from P0 and P2
//! are accumulated next to the claims.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use triad_config::ClaimsConfig;
use triad_core::CoreError;
use triad_core::entities::{Claim, ClaimRejection, Evidence};
use triad_core::enums::{ArtifactSource, RejectionPhase, RejectionReason};

use crate::condition::extract_condition;
use crate::policy::categories_for;
use crate::templates::canonicalize;

fn endpoint_identity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS)\s+(/.*)$")
            .expect("endpoint identity regex must compile")
    })
}

fn path_param_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{[^}]*\}").expect("path param regex must compile"))
}

/// Claims plus the audit trail of everything refused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub claims: Vec<Claim>,
    pub rejections: Vec<ClaimRejection>,
}

impl ClaimSet {
    pub fn extend(&mut self, other: Self) {
        self.claims.extend(other.claims);
        self.rejections.extend(other.rejections);
    }
}

/// Phase 0: canonical `METHOD /path` with every `{…}` segment as `{id}`.
///
/// # Errors
///
/// Returns the [`ClaimRejection`] for an empty or malformed endpoint.
pub fn admit(evidence: &Evidence) -> Result<String, ClaimRejection> {
    let reject = |reason, raw_data: &str| ClaimRejection {
        evidence_id: evidence.id(),
        phase: RejectionPhase::Admission,
        reason,
        raw_data: raw_data.to_string(),
    };

    let endpoint = evidence.endpoint.trim();
    if endpoint.is_empty() {
        return Err(reject(RejectionReason::EmptyEndpoint, &evidence.endpoint));
    }
    let Some(caps) = endpoint_identity_re().captures(endpoint) else {
        return Err(reject(RejectionReason::MalformedEndpointIdentity, endpoint));
    };
    let path = path_param_re().replace_all(caps[2].trim(), "{id}");
    Ok(format!("{} {path}", caps[1].to_uppercase()))
}

/// Deterministic evidence → claim generator.
#[derive(Debug, Clone, Default)]
pub struct ClaimGenerator {
    config: ClaimsConfig,
}

impl ClaimGenerator {
    #[must_use]
    pub const fn new(config: ClaimsConfig) -> Self {
        Self { config }
    }

    /// Phase 4 confidence: extraction reliability of the source, not truth.
    const fn confidence_for(&self, source: ArtifactSource) -> f64 {
        match source {
            ArtifactSource::Readme => self.config.readme_confidence,
            ArtifactSource::ApiSpec | ArtifactSource::Test | ArtifactSource::Code => {
                self.config.structured_confidence
            }
        }
    }

    /// Run all four phases over one evidence item.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfidence`] if the configured confidence
    /// is outside `[0, 1]`. Admission and canonicalization failures are not
    /// errors: they land in [`ClaimSet::rejections`].
    pub fn process(&self, evidence: &Evidence) -> Result<ClaimSet, CoreError> {
        let mut out = ClaimSet::default();

        let endpoint = match admit(evidence) {
            Ok(endpoint) => endpoint,
            Err(rejection) => {
                tracing::debug!(
                    evidence = %rejection.evidence_id,
                    reason = %rejection.reason,
                    "evidence refused at admission"
                );
                out.rejections.push(rejection);
                return Ok(out);
            }
        };

        let source = evidence.source();
        for &category in categories_for(evidence.kind) {
            let Some(assertion) = canonicalize(category, &evidence.observation) else {
                tracing::debug!(
                    evidence = %evidence.id(),
                    %category,
                    "no assertion template matched"
                );
                out.rejections.push(ClaimRejection {
                    evidence_id: evidence.id(),
                    phase: RejectionPhase::Assertion,
                    reason: RejectionReason::UnmappableObservation,
                    raw_data: evidence.observation.clone(),
                });
                continue;
            };

            out.claims.push(Claim::new(
                category,
                endpoint.clone(),
                extract_condition(&evidence.observation),
                assertion,
                source,
                self.confidence_for(source),
            )?);
        }
        Ok(out)
    }

    /// Process every evidence item in order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::process`].
    pub fn generate(&self, evidence: &[Evidence]) -> Result<ClaimSet, CoreError> {
        let mut out = ClaimSet::default();
        for item in evidence {
            out.extend(self.process(item)?);
        }
        Ok(out)
    }
}
