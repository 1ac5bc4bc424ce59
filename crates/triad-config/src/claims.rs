//! Claim materialization settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::unit_interval;

const fn default_structured_confidence() -> f64 {
    0.9
}

const fn default_readme_confidence() -> f64 {
    0.7
}

/// Fixed per-source confidences stamped on claims. They express extraction
/// reliability: deterministic spec/test parsing versus model-assisted README reading.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClaimsConfig {
    #[serde(default = "default_structured_confidence")]
    pub structured_confidence: f64,

    #[serde(default = "default_readme_confidence")]
    pub readme_confidence: f64,
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            structured_confidence: default_structured_confidence(),
            readme_confidence: default_readme_confidence(),
        }
    }
}

impl ClaimsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("claims.structured_confidence", self.structured_confidence)?;
        unit_interval("claims.readme_confidence", self.readme_confidence)
    }
}
