use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Claim, ComparisonKey, Finding};
use crate::enums::{ArtifactSource, ClaimCategory, FindingKind, RiskLevel};

/// Facts derived from one comparison-key bucket. Owns the bucket's claims.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalysisObject {
    pub endpoint: String,
    pub category: ClaimCategory,
    pub condition: Option<String>,
    pub claims: Vec<Claim>,
    pub findings: Vec<Finding>,
}

impl AnalysisObject {
    #[must_use]
    pub fn key(&self) -> ComparisonKey {
        ComparisonKey {
            endpoint: self.endpoint.clone(),
            category: self.category,
            condition: self.condition.clone(),
        }
    }

    #[must_use]
    pub fn has_finding(&self, kind: FindingKind) -> bool {
        self.findings.iter().any(|f| f.kind == kind)
    }

    /// Distinct sources in first-seen order.
    #[must_use]
    pub fn sources(&self) -> Vec<ArtifactSource> {
        let mut sources = Vec::new();
        for claim in &self.claims {
            if !sources.contains(&claim.source) {
                sources.push(claim.source);
            }
        }
        sources
    }
}

/// Heuristic scores for one bucket, keyed identically to its [`AnalysisObject`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvaluationObject {
    pub endpoint: String,
    pub category: ClaimCategory,
    pub condition: Option<String>,
    pub claims: Vec<Claim>,
    pub findings: Vec<Finding>,
    pub coverage_score: f64,
    pub confidence_score: f64,
    pub risk_level: RiskLevel,
}

impl EvaluationObject {
    #[must_use]
    pub fn key(&self) -> ComparisonKey {
        ComparisonKey {
            endpoint: self.endpoint.clone(),
            category: self.category,
            condition: self.condition.clone(),
        }
    }
}
