//! Entity structs for every value that flows through the pipeline.
//!
//! ```text
//! artifacts → Evidence → Claim (+ ClaimRejection) → AnalysisObject → EvaluationObject
//! ```
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the final
//! display payload and the audit trail can be emitted as JSON.

mod analysis;
mod claim;
mod evidence;
mod finding;
mod rejection;

pub use analysis::{AnalysisObject, EvaluationObject};
pub use claim::{Claim, ComparisonKey};
pub use evidence::Evidence;
pub use finding::{AssertionGroup, Finding, FindingDetails};
pub use rejection::ClaimRejection;
