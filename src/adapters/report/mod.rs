//! Report exporters.
//!
//! - `CsvReportExporter` - Sectioned CSV
//! - `JsonReportExporter` - Full evaluation as JSON
//! - `MarkdownReportExporter` - Tables plus calculation trace
//! - `HtmlReportExporter` - Markdown report as a styled page (pulldown-cmark)
//! - `PdfReportExporter` - Markdown report typeset by Pandoc

mod csv;
mod html;
mod json;
mod markdown;
mod pdf;

pub use csv::{CsvReportExporter, CSV_REPORT_TITLE};
pub use html::HtmlReportExporter;
pub use json::JsonReportExporter;
pub use markdown::MarkdownReportExporter;
pub use pdf::{PdfReportExporter, DEFAULT_PDF_TIMEOUT_SECS};

use std::sync::Arc;

use crate::ports::{ReportExporter, ReportFormat};

/// Exporter for the requested format.
pub fn exporter_for(format: ReportFormat) -> Arc<dyn ReportExporter> {
    match format {
        ReportFormat::Csv => Arc::new(CsvReportExporter::new()),
        ReportFormat::Json => Arc::new(JsonReportExporter::new()),
        ReportFormat::Markdown => Arc::new(MarkdownReportExporter::new()),
        ReportFormat::Html => Arc::new(HtmlReportExporter::new()),
        ReportFormat::Pdf => Arc::new(PdfReportExporter::new()),
    }
}
