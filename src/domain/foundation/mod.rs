//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, rounding rules, and error types
//! that form the vocabulary of the PSI ranking domain.

mod errors;
mod ids;
mod precision;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::EvaluationId;
pub use precision::{format4, round4, DECIMAL_PLACES};
pub use timestamp::Timestamp;
