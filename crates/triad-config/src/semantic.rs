//! Semantic collaborator (generative model) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_top_p() -> f64 {
    0.95
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SemanticConfig {
    /// Master switch. When off, README extraction always uses the
    /// deterministic fallback and narration is omitted.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub api_key: String,

    /// Per-call timeout. A timeout is an ordinary collaborator failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub temperature: f64,

    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Whether conflicted units get a narrative description.
    #[serde(default = "default_enabled")]
    pub narrate: bool,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            temperature: 0.0,
            top_p: default_top_p(),
            narrate: default_enabled(),
        }
    }
}

impl SemanticConfig {
    /// Check if the collaborator can actually be called.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }

    /// Copy with the API key masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let api_key = if self.api_key.is_empty() {
            String::new()
        } else {
            String::from("***")
        };
        Self {
            api_key,
            ..self.clone()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "semantic.timeout_secs",
                "must be at least 1",
            ));
        }
        if self.enabled && self.endpoint.trim().is_empty() {
            return Err(ConfigError::invalid("semantic.endpoint", "must not be empty"));
        }
        Ok(())
    }
}
