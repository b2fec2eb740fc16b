//! CSV report exporter.
//!
//! Produces blank-line separated sections, one table each. Numeric values
//! are printed with four decimals.

use async_trait::async_trait;

use crate::domain::evaluation::Evaluation;
use crate::domain::foundation::format4;
use crate::ports::{ExportError, ReportExporter, ReportFormat};

/// Title line of every CSV report.
pub const CSV_REPORT_TITLE: &str = "PSI Decision Support System Report";

/// Renders evaluations as sectioned CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReportExporter;

impl CsvReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the report as a string.
    pub fn to_text(&self, evaluation: &Evaluation) -> String {
        let mut out = String::new();
        out.push_str(CSV_REPORT_TITLE);
        out.push_str("\n\n");

        let respondent = &evaluation.respondent;
        out.push_str("User Information\n");
        push_row(&mut out, &["Name", &respondent.name]);
        push_row(&mut out, &["Age", &respondent.age]);
        push_row(&mut out, &["Education", &respondent.education]);
        push_row(&mut out, &["Location", &respondent.location]);

        out.push_str("\nJob Rankings\n");
        out.push_str("Rank,Job Alternative,PSI Value\n");
        for ranked in &evaluation.ranked_alternatives {
            push_row(
                &mut out,
                &[
                    &ranked.rank.to_string(),
                    &ranked.alternative.name,
                    &format4(ranked.psi_value),
                ],
            );
        }

        out.push_str("\nCriteria Weights\n");
        out.push_str("Criteria ID,Criteria Name,Weight\n");
        for (criterion, weight) in evaluation
            .criteria
            .iter()
            .zip(&evaluation.calculation.weights)
        {
            push_row(&mut out, &[&criterion.id, &criterion.name, &format4(*weight)]);
        }

        out.push_str("\nNormalized Matrix\n");
        let mut header = vec!["Alternative".to_string()];
        header.extend(evaluation.criteria.iter().map(|c| c.id.clone()));
        push_owned_row(&mut out, header);
        for (alternative, row) in evaluation
            .alternatives
            .iter()
            .zip(&evaluation.calculation.normalized_matrix)
        {
            let mut fields = vec![alternative.name.clone()];
            fields.extend(row.iter().map(|v| format4(*v)));
            push_owned_row(&mut out, fields);
        }

        out
    }
}

#[async_trait]
impl ReportExporter for CsvReportExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }

    async fn render(&self, evaluation: &Evaluation) -> Result<Vec<u8>, ExportError> {
        Ok(self.to_text(evaluation).into_bytes())
    }
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row(out: &mut String, fields: &[&str]) {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn push_owned_row(out: &mut String, fields: Vec<String>) {
    let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
    push_row(out, &refs);
}
