//! Evaluation-specific error types.

use crate::domain::analysis::EngineError;
use crate::domain::foundation::{DomainError, ErrorCode, EvaluationId, ValidationError};

/// Errors surfaced by evaluation commands and queries.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Evaluation was not found in history.
    NotFound(EvaluationId),
    /// Request failed intake validation.
    Validation(ValidationError),
    /// Input shape rejected by the engine.
    Engine(EngineError),
    /// Infrastructure error (history storage, export).
    Infrastructure(String),
}

impl EvaluationError {
    pub fn not_found(id: EvaluationId) -> Self {
        EvaluationError::NotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        EvaluationError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::NotFound(_) => ErrorCode::EvaluationNotFound,
            EvaluationError::Validation(_) => ErrorCode::ValidationFailed,
            EvaluationError::Engine(err) => err.code(),
            EvaluationError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            EvaluationError::NotFound(id) => format!("Evaluation not found: {}", id),
            EvaluationError::Validation(err) => format!("Validation failed: {}", err),
            EvaluationError::Engine(err) => err.to_string(),
            EvaluationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EvaluationError {}

impl From<ValidationError> for EvaluationError {
    fn from(err: ValidationError) -> Self {
        EvaluationError::Validation(err)
    }
}

impl From<EngineError> for EvaluationError {
    fn from(err: EngineError) -> Self {
        EvaluationError::Engine(err)
    }
}

impl From<DomainError> for EvaluationError {
    fn from(err: DomainError) -> Self {
        EvaluationError::Infrastructure(err.to_string())
    }
}
