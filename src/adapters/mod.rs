//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `history` - Evaluation history stores (in-memory, JSON file)
//! - `report` - Report exporters (CSV, JSON, Markdown, HTML, PDF)
//! - `catalog` - Criteria catalog files (YAML, JSON)

pub mod catalog;
pub mod history;
pub mod report;

pub use catalog::FileCatalogLoader;
pub use history::{FileEvaluationHistory, InMemoryEvaluationHistory, DEFAULT_HISTORY_CAPACITY};
pub use report::{
    exporter_for, CsvReportExporter, HtmlReportExporter, JsonReportExporter,
    MarkdownReportExporter, PdfReportExporter,
};
