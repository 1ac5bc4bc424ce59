use std::hash::{Hash, Hasher};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ArtifactSource, ClaimCategory};
use crate::errors::CoreError;

/// A canonical, falsifiable behavioral assertion derived from one piece of evidence.
///
/// Equality and hashing ignore `confidence`: two claims are duplicates iff
/// category, endpoint, condition, assertion, and source all match.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Claim {
    pub category: ClaimCategory,
    /// Canonical endpoint identifier, e.g. `GET /users/{id}`.
    pub endpoint: String,
    /// Normalized precondition (e.g. `USER_NOT_EXISTS`); `None` when unconditional.
    pub condition: Option<String>,
    /// Canonical assertion token, e.g. `OUT_HTTP_200`.
    pub assertion: String,
    pub source: ArtifactSource,
    /// Extraction reliability in `[0, 1]`, not truth.
    pub confidence: f64,
}

impl Claim {
    /// Build a claim, rejecting confidences outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfidence`] for NaN or out-of-range values.
    pub fn new(
        category: ClaimCategory,
        endpoint: impl Into<String>,
        condition: Option<String>,
        assertion: impl Into<String>,
        source: ArtifactSource,
        confidence: f64,
    ) -> Result<Self, CoreError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(CoreError::InvalidConfidence { value: confidence });
        }
        Ok(Self {
            category,
            endpoint: endpoint.into(),
            condition,
            assertion: assertion.into(),
            source,
            confidence,
        })
    }

    /// `(endpoint, category, condition)`: what makes two claims describe the same behavior.
    #[must_use]
    pub fn comparison_key(&self) -> ComparisonKey {
        ComparisonKey {
            endpoint: self.endpoint.clone(),
            category: self.category,
            condition: self.condition.clone(),
        }
    }
}

impl PartialEq for Claim {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
            && self.endpoint == other.endpoint
            && self.condition == other.condition
            && self.assertion == other.assertion
            && self.source == other.source
    }
}

impl Eq for Claim {}

impl Hash for Claim {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.endpoint.hash(state);
        self.condition.hash(state);
        self.assertion.hash(state);
        self.source.hash(state);
    }
}

/// Behavioral identity of a claim bucket.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct ComparisonKey {
    pub endpoint: String,
    pub category: ClaimCategory,
    pub condition: Option<String>,
}
