//! Evaluation History Port - Interface for keeping past evaluations.
//!
//! Stores complete evaluations so they can be listed, reopened, and
//! deleted later. Implementations keep a bounded number of entries and
//! evict the oldest first.

use async_trait::async_trait;

use crate::domain::evaluation::{Evaluation, EvaluationError, EvaluationSummary};
use crate::domain::foundation::{DomainError, ErrorCode, EvaluationId};

/// Errors that can occur during history operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Evaluation not found: {0}")]
    NotFound(EvaluationId),

    #[error("Failed to serialize history: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize history: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<HistoryError> for DomainError {
    fn from(err: HistoryError) -> Self {
        let code = match &err {
            HistoryError::NotFound(_) => ErrorCode::EvaluationNotFound,
            HistoryError::SerializationFailed(_) | HistoryError::DeserializationFailed(_) => {
                ErrorCode::SerializationError
            }
            HistoryError::IoError(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

impl From<HistoryError> for EvaluationError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::NotFound(id) => EvaluationError::NotFound(id),
            other => EvaluationError::Infrastructure(other.to_string()),
        }
    }
}

/// Port for persisting and loading past evaluations
#[async_trait]
pub trait EvaluationHistory: Send + Sync {
    /// Save an evaluation as the newest entry
    ///
    /// # Returns
    /// Ids of entries evicted to stay within capacity (oldest first)
    ///
    /// # Errors
    /// Returns `HistoryError` if the save fails
    async fn save(&self, evaluation: &Evaluation) -> Result<Vec<EvaluationId>, HistoryError>;

    /// List stored evaluations, newest first
    async fn list(&self) -> Result<Vec<EvaluationSummary>, HistoryError>;

    /// Load a full evaluation
    ///
    /// # Errors
    /// Returns `HistoryError::NotFound` if no evaluation exists with this id
    async fn get(&self, id: EvaluationId) -> Result<Evaluation, HistoryError>;

    /// Delete an evaluation
    ///
    /// # Errors
    /// Returns `HistoryError::NotFound` if no evaluation exists with this id
    async fn delete(&self, id: EvaluationId) -> Result<(), HistoryError>;

    /// Maximum number of evaluations retained
    fn capacity(&self) -> usize;
}
