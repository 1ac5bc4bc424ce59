use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ArtifactSource, EvidenceType};

/// One literal, located observation read from an artifact. Never inferred.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Evidence {
    #[serde(rename = "type")]
    pub kind: EvidenceType,
    /// Endpoint as written in the artifact (e.g. `GET /users/{userId}`).
    /// Canonicalized later by claim admission.
    pub endpoint: String,
    /// Literal observed behavior, e.g. `returns HTTP 404`.
    pub observation: String,
    pub source_file: String,
    /// `lines 42-44`, `paths./users.get.responses.200`, `test_create [line 9]`, ...
    pub source_location: String,
    pub raw_snippet: Option<String>,
}

impl Evidence {
    /// Stable identifier used by the rejection audit trail.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}:{}", self.source_file, self.source_location)
    }

    #[must_use]
    pub const fn source(&self) -> ArtifactSource {
        self.kind.source()
    }
}
