//! EvaluateAlternativesHandler - Command handler for scoring and ranking
//! a set of alternatives.

use std::sync::Arc;

use crate::domain::analysis::{Alternative, DecisionMatrix, IntakeValidator, Normalizer};
use crate::domain::criteria::CriteriaCatalog;
use crate::domain::evaluation::{Evaluation, EvaluationError, RespondentDetails};
use crate::ports::EvaluationHistory;

/// Command to evaluate alternatives against a catalog snapshot.
#[derive(Debug, Clone)]
pub struct EvaluateAlternativesCommand {
    pub respondent: RespondentDetails,
    pub catalog: CriteriaCatalog,
    pub alternatives: Vec<Alternative>,
}

/// Handler for evaluation runs.
pub struct EvaluateAlternativesHandler {
    history: Arc<dyn EvaluationHistory>,
}

impl EvaluateAlternativesHandler {
    pub fn new(history: Arc<dyn EvaluationHistory>) -> Self {
        Self { history }
    }

    pub async fn handle(
        &self,
        cmd: EvaluateAlternativesCommand,
    ) -> Result<Evaluation, EvaluationError> {
        // 1. Intake checks
        IntakeValidator::check(&cmd.alternatives, &cmd.catalog)?;

        for alternative in &cmd.alternatives {
            let outside = alternative.out_of_domain(&cmd.catalog);
            if !outside.is_empty() {
                tracing::debug!(
                    alternative = %alternative.name,
                    criteria = ?outside,
                    "Scores outside criterion options"
                );
            }
        }

        // 2. Score and rank
        let evaluation = Evaluation::compute(
            cmd.respondent,
            cmd.catalog.snapshot(),
            cmd.alternatives,
        )?;

        let matrix = DecisionMatrix::from_rows(evaluation.calculation.decision_matrix.clone());
        let degenerate = Normalizer::degenerate_columns(&matrix, &evaluation.criteria);
        if !degenerate.is_empty() {
            let ids: Vec<&str> = degenerate
                .iter()
                .map(|&j| evaluation.criteria[j].id.as_str())
                .collect();
            tracing::debug!(criteria = ?ids, "Degenerate columns normalized to zero");
        }

        // 3. Keep in history
        let evicted = self.history.save(&evaluation).await?;
        if !evicted.is_empty() {
            tracing::debug!(count = evicted.len(), "Evicted oldest evaluations from history");
        }

        tracing::info!(
            evaluation_id = %evaluation.id,
            alternatives = evaluation.alternatives.len(),
            criteria = evaluation.criteria.len(),
            top = evaluation.top_alternative().map(|r| r.alternative.name.as_str()).unwrap_or(""),
            "Evaluation computed"
        );

        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEvaluationHistory;
    use crate::domain::criteria::{Criterion, Polarity};
    use crate::domain::evaluation::EvaluationSummary;
    use crate::domain::foundation::{EvaluationId, ValidationError};
    use crate::ports::HistoryError;
    use async_trait::async_trait;

    struct FailingHistory;

    #[async_trait]
    impl EvaluationHistory for FailingHistory {
        async fn save(&self, _evaluation: &Evaluation) -> Result<Vec<EvaluationId>, HistoryError> {
            Err(HistoryError::IoError("disk full".to_string()))
        }

        async fn list(&self) -> Result<Vec<EvaluationSummary>, HistoryError> {
            Ok(Vec::new())
        }

        async fn get(&self, id: EvaluationId) -> Result<Evaluation, HistoryError> {
            Err(HistoryError::NotFound(id))
        }

        async fn delete(&self, id: EvaluationId) -> Result<(), HistoryError> {
            Err(HistoryError::NotFound(id))
        }

        fn capacity(&self) -> usize {
            1
        }
    }

    fn catalog() -> CriteriaCatalog {
        CriteriaCatalog::new(vec![
            Criterion::new("C1", "Salary", Polarity::Benefit)
                .with_option("Low", 1.0)
                .with_option("High", 5.0),
            Criterion::new("C2", "Distance", Polarity::Cost)
                .with_option("Near", 1.0)
                .with_option("Far", 5.0),
        ])
        .unwrap()
    }

    fn command(alternatives: Vec<Alternative>) -> EvaluateAlternativesCommand {
        EvaluateAlternativesCommand {
            respondent: RespondentDetails::new("Dana"),
            catalog: catalog(),
            alternatives,
        }
    }

    fn complete_alternatives() -> Vec<Alternative> {
        vec![
            Alternative::new("1", "Acme")
                .with_score("C1", 3.0)
                .with_score("C2", 1.0),
            Alternative::new("2", "Globex")
                .with_score("C1", 5.0)
                .with_score("C2", 4.0),
        ]
    }

    #[tokio::test]
    async fn evaluates_ranks_and_saves() {
        let history = Arc::new(InMemoryEvaluationHistory::default());
        let handler = EvaluateAlternativesHandler::new(history.clone());

        let evaluation = handler.handle(command(complete_alternatives())).await.unwrap();

        assert_eq!(evaluation.calculation.weights, vec![0.5614, 0.4386]);
        assert_eq!(evaluation.calculation.psi_values, vec![0.7754, 0.6711]);
        assert_eq!(evaluation.top_alternative().unwrap().alternative.name, "Acme");

        let stored = history.get(evaluation.id).await.unwrap();
        assert_eq!(stored, evaluation);
    }

    #[tokio::test]
    async fn incomplete_alternative_is_rejected_before_scoring() {
        let history = Arc::new(InMemoryEvaluationHistory::default());
        let handler = EvaluateAlternativesHandler::new(history.clone());

        let alternatives = vec![Alternative::new("1", "Acme").with_score("C1", 3.0)];
        let err = handler.handle(command(alternatives)).await.unwrap_err();

        assert_eq!(
            err,
            EvaluationError::Validation(ValidationError::invalid_format(
                "Acme",
                "missing scores for C2"
            ))
        );
        assert_eq!(history.len().await, 0);
    }

    #[tokio::test]
    async fn empty_alternatives_are_rejected() {
        let handler =
            EvaluateAlternativesHandler::new(Arc::new(InMemoryEvaluationHistory::default()));

        let err = handler.handle(command(Vec::new())).await.unwrap_err();
        assert!(matches!(err, EvaluationError::Validation(_)));
    }

    #[tokio::test]
    async fn history_failure_surfaces_as_infrastructure_error() {
        let handler = EvaluateAlternativesHandler::new(Arc::new(FailingHistory));

        let err = handler.handle(command(complete_alternatives())).await.unwrap_err();
        assert_eq!(err, EvaluationError::Infrastructure("IO error: disk full".to_string()));
    }

    #[tokio::test]
    async fn out_of_domain_scores_are_still_evaluated() {
        let handler =
            EvaluateAlternativesHandler::new(Arc::new(InMemoryEvaluationHistory::default()));

        let alternatives = vec![
            Alternative::new("1", "Acme")
                .with_score("C1", 2.5)
                .with_score("C2", 1.0),
            Alternative::new("2", "Globex")
                .with_score("C1", 5.0)
                .with_score("C2", 5.0),
        ];
        let evaluation = handler.handle(command(alternatives)).await.unwrap();
        assert_eq!(evaluation.ranked_alternatives.len(), 2);
    }
}
