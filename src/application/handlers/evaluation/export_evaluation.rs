//! ExportEvaluationHandler - Renders a stored evaluation as a report.

use std::sync::Arc;

use crate::adapters::exporter_for;
use crate::domain::evaluation::EvaluationError;
use crate::domain::foundation::EvaluationId;
use crate::ports::{EvaluationHistory, ReportFormat};

/// Query to export one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ExportEvaluationQuery {
    pub evaluation_id: EvaluationId,
    pub format: ReportFormat,
}

/// A rendered report ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub format: ReportFormat,
    pub file_name: String,
    pub content: Vec<u8>,
}

impl ExportedReport {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    /// Content as text, `None` for binary formats.
    pub fn text(&self) -> Option<&str> {
        if self.format.is_text() {
            std::str::from_utf8(&self.content).ok()
        } else {
            None
        }
    }
}

pub struct ExportEvaluationHandler {
    history: Arc<dyn EvaluationHistory>,
}

impl ExportEvaluationHandler {
    pub fn new(history: Arc<dyn EvaluationHistory>) -> Self {
        Self { history }
    }

    pub async fn handle(&self, query: ExportEvaluationQuery) -> Result<ExportedReport, EvaluationError> {
        let evaluation = self.history.get(query.evaluation_id).await?;
        let content = exporter_for(query.format).render(&evaluation).await?;

        tracing::debug!(
            evaluation_id = %evaluation.id,
            format = %query.format,
            bytes = content.len(),
            "Evaluation exported"
        );

        Ok(ExportedReport {
            format: query.format,
            file_name: format!(
                "PSI_Report_{}.{}",
                evaluation.created_at.as_unix_millis(),
                query.format.extension()
            ),
            content,
        })
    }
}
