//! Evaluation Module - stored results of ranking runs.

mod errors;
mod evaluation;

pub use errors::EvaluationError;
pub use evaluation::{Evaluation, EvaluationSummary, RespondentDetails};
