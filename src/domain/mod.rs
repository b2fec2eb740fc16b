//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, rounding, errors)
//! - `criteria` - Criteria definitions and the editable catalog
//! - `analysis` - Pure PSI scoring engine and ranking
//! - `evaluation` - Stored results of ranking runs

pub mod analysis;
pub mod criteria;
pub mod evaluation;
pub mod foundation;
