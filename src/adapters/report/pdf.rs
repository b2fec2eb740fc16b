//! PDF report exporter.
//!
//! Typesets the Markdown report with Pandoc, which must be installed on the
//! system. When Pandoc is missing the exporter returns
//! `ExportError::ServiceUnavailable`.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::MarkdownReportExporter;
use crate::domain::evaluation::Evaluation;
use crate::ports::{ExportError, ReportExporter, ReportFormat};

/// Default limit for one Pandoc run.
pub const DEFAULT_PDF_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct PdfReportExporter {
    markdown: MarkdownReportExporter,
    /// Path to the pandoc executable. If None, PATH is searched.
    pandoc_path: Option<String>,
    timeout_secs: u64,
}

impl PdfReportExporter {
    pub fn new() -> Self {
        Self {
            markdown: MarkdownReportExporter::new(),
            pandoc_path: None,
            timeout_secs: DEFAULT_PDF_TIMEOUT_SECS,
        }
    }

    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Check if Pandoc is installed and runs.
    pub async fn is_available(&self) -> bool {
        Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Typeset Markdown into PDF bytes.
    pub async fn markdown_to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        if !self.is_available().await {
            return Err(ExportError::service_unavailable(format!(
                "`{}` is not installed; PDF export requires Pandoc",
                self.pandoc_command()
            )));
        }

        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                "--pdf-engine=xelatex",
                "-V",
                "geometry:margin=1in",
                "-V",
                "fontsize=10pt",
                "-o",
                "-",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::pdf_failed(format!("Failed to start Pandoc: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::pdf_failed(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.timeout_secs))?
        .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(ExportError::pdf_failed("Pandoc produced no output"));
        }

        tracing::debug!(bytes = output.stdout.len(), "PDF typeset");
        Ok(output.stdout)
    }
}

impl Default for PdfReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportExporter for PdfReportExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }

    async fn render(&self, evaluation: &Evaluation) -> Result<Vec<u8>, ExportError> {
        let markdown = self.markdown.to_text(evaluation)?;
        self.markdown_to_pdf(&markdown).await
    }
}
