//! # triad-core
//!
//! Core domain types and error types for triad.
//!
//! This crate provides the value types every pipeline stage passes along:
//! - [`entities::Evidence`]: one literal, located observation from an artifact
//! - [`entities::Claim`]: a canonical behavioral assertion derived from evidence
//! - [`entities::ClaimRejection`]: audit record for evidence that produced no claim
//! - [`entities::Finding`], [`entities::AnalysisObject`], [`entities::EvaluationObject`]
//! - Enumerations for artifact sources, claim categories, finding kinds, and risk levels
//! - The cross-cutting [`errors::CoreError`]
//!
//! All entities are created once per pipeline run and never mutated afterwards.

pub mod entities;
pub mod enums;
pub mod errors;

pub use errors::CoreError;
