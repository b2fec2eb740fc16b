//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EvaluationHistory` - Bounded store of past evaluations
//! - `ReportExporter` - Renders an evaluation as a text report

mod evaluation_history;
mod report_exporter;

pub use evaluation_history::{EvaluationHistory, HistoryError};
pub use report_exporter::{ExportError, ReportExporter, ReportFormat};
