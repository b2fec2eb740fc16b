//! Criteria Module - definitions of the dimensions alternatives are scored on.
//!
//! # Components
//!
//! - `Criterion` / `Polarity` / `CriterionOption` - a single criterion and its legal values
//! - `CriteriaCatalog` - ordered, uniquely keyed set of active criteria with edit operations
//! - `JOB_OFFER_CRITERIA` - the built-in job-offer catalog

mod catalog;
mod criterion;
mod defaults;

pub use catalog::{CatalogError, CriteriaCatalog, UpsertOutcome};
pub use criterion::{Criterion, CriterionOption, Polarity};
pub use defaults::JOB_OFFER_CRITERIA;
