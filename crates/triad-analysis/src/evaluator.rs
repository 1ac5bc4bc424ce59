//! Heuristic scoring of analysed buckets.

use triad_config::ScoringConfig;
use triad_core::CoreError;
use triad_core::entities::{AnalysisObject, Claim, EvaluationObject, Finding};
use triad_core::enums::{ArtifactSource, FindingKind, RiskLevel};

/// Scores buckets with the configured source weights and risk thresholds.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: ScoringConfig,
}

impl Evaluator {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    const fn weight(&self, source: ArtifactSource) -> f64 {
        match source {
            ArtifactSource::Test => self.config.weight_test,
            ArtifactSource::ApiSpec => self.config.weight_api_spec,
            ArtifactSource::Readme => self.config.weight_readme,
            ArtifactSource::Code => self.config.weight_unknown,
        }
    }

    /// Fraction of the three recognized artifact kinds present.
    #[must_use]
    pub fn coverage_score(sources: &[ArtifactSource]) -> f64 {
        let present = ArtifactSource::RECOGNIZED
            .iter()
            .filter(|s| sources.contains(s))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let ratio = present as f64 / ArtifactSource::RECOGNIZED.len() as f64;
        ratio
    }

    /// Source-weighted mean confidence. Zero when there is nothing to weigh.
    #[must_use]
    pub fn confidence_score(&self, claims: &[Claim]) -> f64 {
        let (weighted, total) = claims.iter().fold((0.0, 0.0), |(weighted, total), claim| {
            let w = self.weight(claim.source);
            (claim.confidence.mul_add(w, weighted), total + w)
        });
        if total > 0.0 { weighted / total } else { 0.0 }
    }

    /// Top-down risk ladder; the first matching rung wins.
    #[must_use]
    pub fn risk_level(&self, findings: &[Finding], confidence: f64, coverage: f64) -> RiskLevel {
        let any = |kind| findings.iter().any(|f| f.kind == kind);
        let c = &self.config;

        if any(FindingKind::Contradiction) || confidence < c.critical_confidence {
            RiskLevel::Critical
        } else if any(FindingKind::MultipleSuccessVariants)
            || any(FindingKind::DocumentationOnly)
            || confidence < c.high_confidence
            || coverage < c.high_coverage
        {
            RiskLevel::High
        } else if confidence < c.medium_confidence || coverage < c.medium_coverage {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Score one analysed bucket. The result carries the same key, claims,
    /// and findings as its input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyBucket`] if the analysis holds no claims.
    pub fn evaluate(&self, analysis: &AnalysisObject) -> Result<EvaluationObject, CoreError> {
        if analysis.claims.is_empty() {
            return Err(CoreError::EmptyBucket {
                endpoint: analysis.endpoint.clone(),
            });
        }
        let coverage_score = Self::coverage_score(&analysis.sources());
        let confidence_score = self.confidence_score(&analysis.claims);
        let risk_level = self.risk_level(&analysis.findings, confidence_score, coverage_score);

        Ok(EvaluationObject {
            endpoint: analysis.endpoint.clone(),
            category: analysis.category,
            condition: analysis.condition.clone(),
            claims: analysis.claims.clone(),
            findings: analysis.findings.clone(),
            coverage_score,
            confidence_score,
            risk_level,
        })
    }

    /// Score every bucket, keeping input order.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Self::evaluate`] failure.
    pub fn evaluate_all(
        &self,
        analyses: &[AnalysisObject],
    ) -> Result<Vec<EvaluationObject>, CoreError> {
        analyses.iter().map(|a| self.evaluate(a)).collect()
    }
}
