//! Narration enrichment for conflicted units.

use triad_semantic::{AssertionSummary, CoverageSummary, SemanticService, UnitSummary};

use crate::model::BehaviorUnitCard;

/// The narration payload for one card.
#[must_use]
pub fn unit_summary(card: &BehaviorUnitCard) -> UnitSummary {
    UnitSummary {
        endpoint: card.endpoint.clone(),
        condition: card.condition.clone(),
        assertions: card
            .assertion_state
            .assertions
            .iter()
            .map(|a| AssertionSummary {
                assertion: a.assertion.clone(),
                sources: a.sources.clone(),
            })
            .collect(),
        has_conflicts: card.assertion_state.has_conflicts,
        source_coverage: CoverageSummary {
            test: card.source_coverage.test,
            api_spec: card.source_coverage.api_spec,
            readme: card.source_coverage.readme,
        },
        structural_warnings: card.structural_warnings.clone(),
        risk_level: card.risk_band,
        confidence_score: card.confidence_score,
    }
}

/// Ask the collaborator to explain a conflicted unit.
///
/// Conflict-free units are never sent. Failures and blank replies yield
/// `None` and never affect the rest of the card.
pub fn narrate(card: &BehaviorUnitCard, service: &dyn SemanticService) -> Option<String> {
    if !card.assertion_state.has_conflicts {
        return None;
    }
    match service.describe_unit(&unit_summary(card)) {
        Ok(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Err(e) => {
            tracing::warn!(endpoint = %card.endpoint, %e, "narration unavailable, omitting");
            None
        }
    }
}
