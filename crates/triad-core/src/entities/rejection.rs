use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RejectionPhase, RejectionReason};

/// Audit record for an evidence item (or one of its skeletons) that did not
/// become a claim.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClaimRejection {
    pub evidence_id: String,
    pub phase: RejectionPhase,
    pub reason: RejectionReason,
    /// The input the phase refused: the raw endpoint for admission failures,
    /// the raw observation for assertion failures.
    pub raw_data: String,
}
