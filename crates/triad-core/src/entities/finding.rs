use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Claim;
use crate::enums::{ArtifactSource, FindingKind};

/// A structural fact about one claim bucket. Descriptive only: no severity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Finding {
    pub kind: FindingKind,
    pub description: String,
    pub related_claims: Vec<Claim>,
    pub details: Option<FindingDetails>,
}

impl Finding {
    #[must_use]
    pub fn new(kind: FindingKind, description: impl Into<String>, related_claims: Vec<Claim>) -> Self {
        Self {
            kind,
            description: description.into(),
            related_claims,
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: FindingDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Kind-specific payload attached to some findings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum FindingDetails {
    /// `contradiction`: each distinct assertion with the sources asserting it.
    AssertionGroups { assertion_groups: Vec<AssertionGroup> },
    /// `multiple_success_variants`: the distinct `OUT_HTTP_2xx` tokens.
    SuccessVariants { variants: Vec<String> },
    /// `confidence_spread`.
    ConfidenceSpread {
        min_confidence: f64,
        max_confidence: f64,
        spread: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssertionGroup {
    pub assertion: String,
    pub sources: Vec<ArtifactSource>,
}
