//! Display model: the value handed to presentation.
//!
//! A [`BehaviorUnitCard`] is organized in three tiers:
//!
//! 1. required truth: endpoint, condition, assertions, source coverage
//! 2. structural warnings, only when present
//! 3. heuristic context: scores and risk band, collapsed by default

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use triad_core::entities::{Claim, Finding};
use triad_core::enums::{ArtifactSource, ClaimCategory, FindingKind, RiskLevel};

/// One distinct assertion of a unit and the sources asserting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssertionInfo {
    pub assertion: String,
    /// Sorted, distinct.
    pub sources: Vec<ArtifactSource>,
    /// Set on every assertion of a unit that has more than one.
    pub is_conflicted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssertionState {
    /// First-seen order.
    pub assertions: Vec<AssertionInfo>,
    pub has_conflicts: bool,
}

impl AssertionState {
    /// The single assertion of a conflict-free unit.
    #[must_use]
    pub fn canonical_assertion(&self) -> Option<&str> {
        if self.has_conflicts {
            return None;
        }
        self.assertions.first().map(|a| a.assertion.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceCoverage {
    pub test: bool,
    pub api_spec: bool,
    pub readme: bool,
}

impl SourceCoverage {
    #[must_use]
    pub fn from_sources(sources: &[ArtifactSource]) -> Self {
        Self {
            test: sources.contains(&ArtifactSource::Test),
            api_spec: sources.contains(&ArtifactSource::ApiSpec),
            readme: sources.contains(&ArtifactSource::Readme),
        }
    }

    #[must_use]
    pub fn count(self) -> usize {
        [self.test, self.api_spec, self.readme]
            .into_iter()
            .filter(|present| *present)
            .count()
    }

    #[must_use]
    pub const fn is_full(self) -> bool {
        self.test && self.api_spec && self.readme
    }

    /// Labels of the absent recognized sources, in `TEST, API_SPEC, README` order.
    #[must_use]
    pub fn missing_sources(self) -> Vec<&'static str> {
        [
            (self.test, ArtifactSource::Test),
            (self.api_spec, ArtifactSource::ApiSpec),
            (self.readme, ArtifactSource::Readme),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, source)| source.label())
        .collect()
    }
}

/// The atomic unit of display: one comparison-key bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BehaviorUnitCard {
    pub endpoint: String,
    pub condition: Option<String>,
    pub category: ClaimCategory,
    pub assertion_state: AssertionState,
    pub source_coverage: SourceCoverage,

    pub structural_warnings: Vec<FindingKind>,

    pub coverage_score: f64,
    pub confidence_score: f64,
    pub risk_band: RiskLevel,

    /// Narrative explanation of a conflicted unit. Enrichment only.
    pub semantic_description: Option<String>,
    pub recommendations: Vec<String>,

    pub claims: Vec<Claim>,
    pub findings: Vec<Finding>,
}

impl BehaviorUnitCard {
    #[must_use]
    pub fn has_warning(&self, kind: FindingKind) -> bool {
        self.structural_warnings.contains(&kind)
    }

    #[must_use]
    pub fn contradiction_count(&self) -> usize {
        self.structural_warnings
            .iter()
            .filter(|w| **w == FindingKind::Contradiction)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EndpointSummary {
    pub endpoint: String,
    pub behavior_count: usize,
    pub contradiction_count: usize,
    /// Units asserted only by documentation, never by a test.
    pub undocumented_count: usize,
    pub highest_risk_band: Option<RiskLevel>,
    pub behavioral_units: Vec<BehaviorUnitCard>,
}

/// Units banded by risk; each band sorted by contradiction count, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RiskDrivenView {
    pub critical_behaviors: Vec<BehaviorUnitCard>,
    pub high_risk_behaviors: Vec<BehaviorUnitCard>,
    pub medium_risk_behaviors: Vec<BehaviorUnitCard>,
    pub low_risk_behaviors: Vec<BehaviorUnitCard>,
}

/// Coverage gaps. A unit may sit in several `no_*` lists, or in `full_coverage` only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoverageView {
    pub no_tests: Vec<BehaviorUnitCard>,
    pub no_spec: Vec<BehaviorUnitCard>,
    pub no_readme: Vec<BehaviorUnitCard>,
    pub full_coverage: Vec<BehaviorUnitCard>,
}

/// Everything presentation needs, derived once per run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayContext {
    pub behavioral_units: Vec<BehaviorUnitCard>,
    pub endpoint_summaries: Vec<EndpointSummary>,
    pub risk_driven_view: RiskDrivenView,
    pub coverage_view: CoverageView,
}

impl DisplayContext {
    #[must_use]
    pub const fn total_behaviors(&self) -> usize {
        self.behavioral_units.len()
    }

    #[must_use]
    pub fn total_contradictions(&self) -> usize {
        self.behavioral_units
            .iter()
            .filter(|u| u.has_warning(FindingKind::Contradiction))
            .count()
    }
}
