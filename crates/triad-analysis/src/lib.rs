//! # triad-analysis
//!
//! Two layers over grouped claims:
//!
//! - [`analyzer`]: facts only. Each comparison-key bucket becomes an
//!   [`AnalysisObject`](triad_core::entities::AnalysisObject) listing what is
//!   structurally true of it (contradictions, missing sources, ...).
//! - [`evaluator`]: heuristics. Coverage and confidence scores plus a risk
//!   level from a fixed ladder, all thresholds taken from
//!   [`ScoringConfig`](triad_config::ScoringConfig).

pub mod analyzer;
pub mod evaluator;
pub mod grouping;

pub use analyzer::{analyse_bucket, analyse_claims};
pub use evaluator::Evaluator;
pub use grouping::group_claims;
