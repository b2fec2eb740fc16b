//! EvaluationHistoryHandler - Queries and deletions over past evaluations.

use std::sync::Arc;

use crate::domain::evaluation::{Evaluation, EvaluationError, EvaluationSummary};
use crate::domain::foundation::EvaluationId;
use crate::ports::EvaluationHistory;

/// Handler for browsing and pruning evaluation history.
pub struct EvaluationHistoryHandler {
    history: Arc<dyn EvaluationHistory>,
}

impl EvaluationHistoryHandler {
    pub fn new(history: Arc<dyn EvaluationHistory>) -> Self {
        Self { history }
    }

    /// Summaries of stored evaluations, newest first.
    pub async fn list(&self) -> Result<Vec<EvaluationSummary>, EvaluationError> {
        Ok(self.history.list().await?)
    }

    /// Full evaluation by id.
    pub async fn get(&self, id: EvaluationId) -> Result<Evaluation, EvaluationError> {
        Ok(self.history.get(id).await?)
    }

    pub async fn delete(&self, id: EvaluationId) -> Result<(), EvaluationError> {
        self.history.delete(id).await?;
        tracing::info!(evaluation_id = %id, "Evaluation deleted from history");
        Ok(())
    }
}
