//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod evaluation;

pub use evaluation::{
    EvaluateAlternativesCommand, EvaluateAlternativesHandler, EvaluationHistoryHandler,
    EvaluationRequest, ExportEvaluationHandler, ExportEvaluationQuery, ExportedReport,
};
