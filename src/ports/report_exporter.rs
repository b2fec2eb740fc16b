//! Report Exporter Port - renders evaluations for people and other tools.
//!
//! The domain depends on this trait, while adapters (CSV, JSON, Markdown,
//! HTML, PDF) provide the implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::evaluation::{Evaluation, EvaluationError};

/// Port for rendering an evaluation to a report document.
///
/// # Contract
///
/// Implementations must:
/// - Render rankings in rank order
/// - List criteria weights in criteria order
/// - Print PSI values and weights with four decimals
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ReportFormat;

    /// Render the evaluation. Text formats are UTF-8 encoded.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if rendering fails.
    async fn render(&self, evaluation: &Evaluation) -> Result<Vec<u8>, ExportError>;
}

/// Report formats supported by the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Comma-separated sections.
    Csv,
    /// Full evaluation as pretty JSON.
    Json,
    /// Tables plus the detailed calculation trace.
    Markdown,
    /// Standalone styled HTML page of the Markdown report.
    Html,
    /// PDF document typeset from the Markdown report.
    Pdf,
}

impl ReportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv; charset=utf-8",
            ReportFormat::Json => "application/json",
            ReportFormat::Markdown => "text/markdown; charset=utf-8",
            ReportFormat::Html => "text/html; charset=utf-8",
            ReportFormat::Pdf => "application/pdf",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
            ReportFormat::Html => "html",
            ReportFormat::Pdf => "pdf",
        }
    }

    /// Whether the rendered content is UTF-8 text.
    pub fn is_text(&self) -> bool {
        !matches!(self, ReportFormat::Pdf)
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Html => write!(f, "html"),
            ReportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "html" | "htm" => Ok(ReportFormat::Html),
            "pdf" => Ok(ReportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during report rendering.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The requested format is not supported.
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// The evaluation could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    /// An external converter is missing.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    /// PDF typesetting failed.
    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    /// Conversion did not finish in time.
    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }
}

impl From<ExportError> for EvaluationError {
    fn from(err: ExportError) -> Self {
        EvaluationError::Infrastructure(err.to_string())
    }
}
