//! Evaluation command and query handlers.

mod evaluate_alternatives;
mod evaluation_history;
mod export_evaluation;
mod request;

pub use evaluate_alternatives::{EvaluateAlternativesCommand, EvaluateAlternativesHandler};
pub use evaluation_history::EvaluationHistoryHandler;
pub use export_evaluation::{ExportEvaluationHandler, ExportEvaluationQuery, ExportedReport};
pub use request::EvaluationRequest;
