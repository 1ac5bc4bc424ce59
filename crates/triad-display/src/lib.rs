//! # triad-display
//!
//! Projects analysed and evaluated buckets into presentation-ready
//! [`DisplayContext`] values: one [`BehaviorUnitCard`] per bucket plus
//! endpoint, risk, and coverage views derived from the cards alone.
//!
//! Narration through the semantic collaborator is optional enrichment and
//! is requested only for conflicted units.

pub mod formatter;
pub mod model;
pub mod narrate;
pub mod policy;
pub mod projector;
pub mod views;

pub use formatter::{FormatOptions, format_report, format_unit_card};
pub use model::{
    AssertionInfo, AssertionState, BehaviorUnitCard, CoverageView, DisplayContext,
    EndpointSummary, RiskDrivenView, SourceCoverage,
};
pub use projector::Projector;
