//! # triad-claims
//!
//! Turns [`Evidence`](triad_core::entities::Evidence) into canonical
//! [`Claim`](triad_core::entities::Claim)s through four deterministic phases:
//! admission, category branching, assertion canonicalization, and condition
//! extraction. Policy and template tables are compile-time constants keyed by
//! enum variant.

pub mod condition;
pub mod generator;
pub mod policy;
pub mod templates;

pub use condition::extract_condition;
pub use generator::{ClaimGenerator, ClaimSet, admit};
pub use policy::categories_for;
pub use templates::canonicalize;
