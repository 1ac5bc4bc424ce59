//! Analysis + evaluation → unit cards.

use std::collections::HashMap;

use triad_core::entities::{AnalysisObject, Claim, ComparisonKey, EvaluationObject};
use triad_core::enums::ArtifactSource;
use triad_semantic::SemanticService;

use crate::model::{AssertionInfo, AssertionState, BehaviorUnitCard, DisplayContext, SourceCoverage};
use crate::narrate::narrate;
use crate::policy::recommendations;
use crate::views::build_context;

/// Group a bucket's claims by assertion text, in first-seen order.
#[must_use]
pub fn assertion_state(claims: &[Claim]) -> AssertionState {
    let mut groups: Vec<(String, Vec<ArtifactSource>)> = Vec::new();
    for claim in claims {
        match groups.iter_mut().find(|(a, _)| *a == claim.assertion) {
            Some((_, sources)) => {
                if !sources.contains(&claim.source) {
                    sources.push(claim.source);
                }
            }
            None => groups.push((claim.assertion.clone(), vec![claim.source])),
        }
    }

    let has_conflicts = groups.len() > 1;
    let assertions = groups
        .into_iter()
        .map(|(assertion, mut sources)| {
            sources.sort();
            AssertionInfo {
                assertion,
                sources,
                is_conflicted: has_conflicts,
            }
        })
        .collect();
    AssertionState {
        assertions,
        has_conflicts,
    }
}

/// Build the card for one joined analysis/evaluation pair.
#[must_use]
pub fn unit_card(analysis: &AnalysisObject, evaluation: &EvaluationObject) -> BehaviorUnitCard {
    BehaviorUnitCard {
        endpoint: analysis.endpoint.clone(),
        condition: analysis.condition.clone(),
        category: analysis.category,
        assertion_state: assertion_state(&analysis.claims),
        source_coverage: SourceCoverage::from_sources(&analysis.sources()),
        structural_warnings: analysis
            .findings
            .iter()
            .map(|f| f.kind)
            .filter(|k| k.is_structural())
            .collect(),
        coverage_score: evaluation.coverage_score,
        confidence_score: evaluation.confidence_score,
        risk_band: evaluation.risk_level,
        semantic_description: None,
        recommendations: recommendations(&evaluation.findings),
        claims: analysis.claims.clone(),
        findings: analysis.findings.clone(),
    }
}

/// Joins analyses with evaluations and optionally narrates conflicts.
#[derive(Default)]
pub struct Projector<'a> {
    narrator: Option<&'a dyn SemanticService>,
}

impl<'a> Projector<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { narrator: None }
    }

    /// Request a narrative for every conflicted unit from `service`.
    #[must_use]
    pub const fn with_narrator(mut self, service: &'a dyn SemanticService) -> Self {
        self.narrator = Some(service);
        self
    }

    /// Project analyses into a [`DisplayContext`].
    ///
    /// An analysis with no evaluation under the same key is dropped with a
    /// warning; the rest of the run is unaffected.
    #[must_use]
    pub fn project(
        &self,
        analyses: &[AnalysisObject],
        evaluations: &[EvaluationObject],
    ) -> DisplayContext {
        let by_key: HashMap<ComparisonKey, &EvaluationObject> =
            evaluations.iter().map(|e| (e.key(), e)).collect();

        let mut units = Vec::with_capacity(analyses.len());
        for analysis in analyses {
            let Some(evaluation) = by_key.get(&analysis.key()) else {
                tracing::warn!(
                    endpoint = %analysis.endpoint,
                    category = %analysis.category,
                    "analysis has no matching evaluation, dropping unit"
                );
                continue;
            };
            let mut card = unit_card(analysis, evaluation);
            if let Some(service) = self.narrator {
                card.semantic_description = narrate(&card, service);
            }
            units.push(card);
        }

        tracing::debug!(units = units.len(), "projected display units");
        build_context(units)
    }
}

impl std::fmt::Debug for Projector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projector")
            .field("narrates", &self.narrator.is_some())
            .finish()
    }
}
