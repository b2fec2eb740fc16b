//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (evaluate) are kept apart from query handlers
//! (history, export).

pub mod handlers;

pub use handlers::{
    EvaluateAlternativesCommand, EvaluateAlternativesHandler, EvaluationHistoryHandler,
    EvaluationRequest, ExportEvaluationHandler, ExportEvaluationQuery, ExportedReport,
};
