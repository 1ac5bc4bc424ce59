//! Aggregation views derived purely from unit cards.

use triad_core::enums::{FindingKind, RiskLevel};

use crate::model::{BehaviorUnitCard, CoverageView, DisplayContext, EndpointSummary, RiskDrivenView};

/// Per-endpoint summaries in first-seen endpoint order.
#[must_use]
pub fn endpoint_summaries(units: &[BehaviorUnitCard]) -> Vec<EndpointSummary> {
    let mut groups: Vec<(String, Vec<BehaviorUnitCard>)> = Vec::new();
    for unit in units {
        match groups.iter_mut().find(|(endpoint, _)| *endpoint == unit.endpoint) {
            Some((_, members)) => members.push(unit.clone()),
            None => groups.push((unit.endpoint.clone(), vec![unit.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(endpoint, members)| EndpointSummary {
            behavior_count: members.len(),
            contradiction_count: count(&members, FindingKind::Contradiction),
            undocumented_count: count(&members, FindingKind::DocumentationOnly),
            highest_risk_band: members
                .iter()
                .map(|u| u.risk_band)
                .max_by_key(|band| band.rank()),
            endpoint,
            behavioral_units: members,
        })
        .collect()
}

fn count(units: &[BehaviorUnitCard], kind: FindingKind) -> usize {
    units.iter().filter(|u| u.has_warning(kind)).count()
}

#[must_use]
pub fn risk_driven_view(units: &[BehaviorUnitCard]) -> RiskDrivenView {
    let band = |level: RiskLevel| {
        let mut members: Vec<_> = units
            .iter()
            .filter(|u| u.risk_band == level)
            .cloned()
            .collect();
        // stable: ties keep input order
        members.sort_by_key(|u| std::cmp::Reverse(u.contradiction_count()));
        members
    };

    RiskDrivenView {
        critical_behaviors: band(RiskLevel::Critical),
        high_risk_behaviors: band(RiskLevel::High),
        medium_risk_behaviors: band(RiskLevel::Medium),
        low_risk_behaviors: band(RiskLevel::Low),
    }
}

#[must_use]
pub fn coverage_view(units: &[BehaviorUnitCard]) -> CoverageView {
    let select = |keep: fn(&BehaviorUnitCard) -> bool| -> Vec<BehaviorUnitCard> {
        units.iter().filter(|u| keep(u)).cloned().collect()
    };

    CoverageView {
        no_tests: select(|u| !u.source_coverage.test),
        no_spec: select(|u| !u.source_coverage.api_spec),
        no_readme: select(|u| !u.source_coverage.readme),
        full_coverage: select(|u| u.source_coverage.is_full()),
    }
}

/// Assemble the full context around a list of cards.
#[must_use]
pub fn build_context(units: Vec<BehaviorUnitCard>) -> DisplayContext {
    DisplayContext {
        endpoint_summaries: endpoint_summaries(&units),
        risk_driven_view: risk_driven_view(&units),
        coverage_view: coverage_view(&units),
        behavioral_units: units,
    }
}
