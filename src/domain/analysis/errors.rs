//! Input-shape errors raised by the scoring engine.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Structural violations that abort a computation before any numbers are produced.
///
/// Numeric degeneracies (all-zero columns, zero total deviation) are never
/// reported here; the engine absorbs them with zero fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("At least one criterion is required")]
    NoCriteria,

    #[error("At least one alternative is required")]
    NoAlternatives,

    #[error("Expected one PSI value per alternative: {alternatives} alternatives, {psi_values} values")]
    LengthMismatch {
        alternatives: usize,
        psi_values: usize,
    },
}

impl EngineError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::NoCriteria => ErrorCode::NoCriteria,
            EngineError::NoAlternatives => ErrorCode::NoAlternatives,
            EngineError::LengthMismatch { .. } => ErrorCode::LengthMismatch,
        }
    }
}

impl From<EngineError> for DomainError {
    fn from(err: EngineError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
