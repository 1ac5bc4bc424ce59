//! Evidence extraction tuning.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_signal_threshold() -> usize {
    2
}

const fn default_max_assert_distance() -> usize {
    5
}

const fn default_endpoint_search_radius() -> usize {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Minimum API keyword count on a header line for it to open (or to
    /// survive as a sub-header of) a README API section.
    #[serde(default = "default_signal_threshold")]
    pub signal_threshold: usize,

    /// Maximum line distance between a test request call and the status
    /// assertion attributed to it.
    #[serde(default = "default_max_assert_distance")]
    pub max_assert_distance: usize,

    /// How many lines above and below a README fallback match are searched
    /// for an explicit `METHOD /path` token.
    #[serde(default = "default_endpoint_search_radius")]
    pub endpoint_search_radius: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            signal_threshold: default_signal_threshold(),
            max_assert_distance: default_max_assert_distance(),
            endpoint_search_radius: default_endpoint_search_radius(),
        }
    }
}

impl ExtractionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.signal_threshold == 0 {
            return Err(ConfigError::invalid(
                "extraction.signal_threshold",
                "must be at least 1",
            ));
        }
        if self.max_assert_distance == 0 {
            return Err(ConfigError::invalid(
                "extraction.max_assert_distance",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
