//! Evaluator weights and risk ladder thresholds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::unit_interval;

const fn default_weight_test() -> f64 {
    1.0
}

const fn default_weight_api_spec() -> f64 {
    0.9
}

const fn default_weight_readme() -> f64 {
    0.7
}

const fn default_weight_unknown() -> f64 {
    0.5
}

const fn default_critical_confidence() -> f64 {
    0.3
}

const fn default_high_confidence() -> f64 {
    0.5
}

const fn default_high_coverage() -> f64 {
    0.5
}

const fn default_medium_confidence() -> f64 {
    0.7
}

const fn default_medium_coverage() -> f64 {
    0.7
}

/// Scoring knobs for the evaluator.
///
/// The risk ladder reads top-down:
///
/// ```text
/// critical: contradiction, or confidence < critical_confidence
/// high:     multiple success variants / documentation only,
///           or confidence < high_confidence, or coverage < high_coverage
/// medium:   confidence < medium_confidence, or coverage < medium_coverage
/// low:      otherwise
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoringConfig {
    #[serde(default = "default_weight_test")]
    pub weight_test: f64,
    #[serde(default = "default_weight_api_spec")]
    pub weight_api_spec: f64,
    #[serde(default = "default_weight_readme")]
    pub weight_readme: f64,
    /// Weight for any source outside the three recognized artifact kinds.
    #[serde(default = "default_weight_unknown")]
    pub weight_unknown: f64,

    #[serde(default = "default_critical_confidence")]
    pub critical_confidence: f64,
    #[serde(default = "default_high_confidence")]
    pub high_confidence: f64,
    #[serde(default = "default_high_coverage")]
    pub high_coverage: f64,
    #[serde(default = "default_medium_confidence")]
    pub medium_confidence: f64,
    #[serde(default = "default_medium_coverage")]
    pub medium_coverage: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_test: default_weight_test(),
            weight_api_spec: default_weight_api_spec(),
            weight_readme: default_weight_readme(),
            weight_unknown: default_weight_unknown(),
            critical_confidence: default_critical_confidence(),
            high_confidence: default_high_confidence(),
            high_coverage: default_high_coverage(),
            medium_confidence: default_medium_confidence(),
            medium_coverage: default_medium_coverage(),
        }
    }
}

impl ScoringConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("scoring.weight_test", self.weight_test)?;
        unit_interval("scoring.weight_api_spec", self.weight_api_spec)?;
        unit_interval("scoring.weight_readme", self.weight_readme)?;
        unit_interval("scoring.weight_unknown", self.weight_unknown)?;
        unit_interval("scoring.critical_confidence", self.critical_confidence)?;
        unit_interval("scoring.high_confidence", self.high_confidence)?;
        unit_interval("scoring.high_coverage", self.high_coverage)?;
        unit_interval("scoring.medium_confidence", self.medium_confidence)?;
        unit_interval("scoring.medium_coverage", self.medium_coverage)
    }
}
