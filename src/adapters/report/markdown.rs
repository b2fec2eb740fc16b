//! Markdown report exporter.
//!
//! Renders the ranking, the criteria weights, and a step-by-step trace of
//! the PSI calculation as GitHub-flavoured tables.

use async_trait::async_trait;
use std::fmt::Write;

use crate::domain::evaluation::Evaluation;
use crate::domain::foundation::format4;
use crate::ports::{ExportError, ReportExporter, ReportFormat};

#[derive(Debug, Clone, Copy)]
pub struct MarkdownReportExporter {
    include_trace: bool,
}

impl MarkdownReportExporter {
    /// Exporter including the calculation trace.
    pub fn new() -> Self {
        Self {
            include_trace: true,
        }
    }

    /// Only rankings and weights.
    pub fn summary_only() -> Self {
        Self {
            include_trace: false,
        }
    }

    /// Render the report as Markdown text.
    pub fn to_text(&self, evaluation: &Evaluation) -> Result<String, ExportError> {
        self.build(evaluation)
            .map_err(|e| ExportError::Serialization(e.to_string()))
    }

    fn build(&self, evaluation: &Evaluation) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let respondent = &evaluation.respondent;
        let calc = &evaluation.calculation;

        writeln!(out, "# PSI Decision Support System Report")?;
        writeln!(out)?;
        writeln!(out, "## User Information")?;
        writeln!(out)?;
        writeln!(out, "- **Name:** {}", respondent.name)?;
        writeln!(out, "- **Age:** {}", respondent.age)?;
        writeln!(out, "- **Education:** {}", respondent.education)?;
        writeln!(out, "- **Location:** {}", respondent.location)?;
        writeln!(out, "- **Evaluated:** {}", evaluation.created_at)?;
        writeln!(out)?;

        writeln!(out, "## Job Rankings")?;
        writeln!(out)?;
        writeln!(out, "| Rank | Job Alternative | PSI Value |")?;
        writeln!(out, "|---:|---|---:|")?;
        for ranked in &evaluation.ranked_alternatives {
            writeln!(
                out,
                "| #{} | {} | {} |",
                ranked.rank,
                cell(&ranked.alternative.name),
                format4(ranked.psi_value)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Criteria Weights")?;
        writeln!(out)?;
        writeln!(out, "| ID | Criteria | Type | Weight |")?;
        writeln!(out, "|---|---|---|---:|")?;
        for (criterion, weight) in evaluation.criteria.iter().zip(&calc.weights) {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                cell(&criterion.id),
                cell(&criterion.name),
                criterion.polarity,
                format4(*weight)
            )?;
        }

        if !self.include_trace {
            return Ok(out);
        }

        let ids: Vec<String> = evaluation.criteria.iter().map(|c| cell(&c.id)).collect();

        writeln!(out)?;
        writeln!(out, "## Detailed PSI Calculation")?;
        writeln!(out)?;
        writeln!(out, "### Step 1: Decision Matrix")?;
        writeln!(out)?;
        matrix_header(&mut out, &ids)?;
        for (alternative, row) in evaluation.alternatives.iter().zip(&calc.decision_matrix) {
            let values: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(out, "| {} | {} |", cell(&alternative.name), values.join(" | "))?;
        }
        writeln!(out)?;

        writeln!(out, "### Step 2: Normalized Matrix")?;
        writeln!(out)?;
        matrix_header(&mut out, &ids)?;
        for (alternative, row) in evaluation.alternatives.iter().zip(&calc.normalized_matrix) {
            writeln!(out, "| {} | {} |", cell(&alternative.name), fixed(row))?;
        }
        writeln!(out)?;

        writeln!(out, "### Step 3: Average Values")?;
        writeln!(out)?;
        matrix_header(&mut out, &ids)?;
        writeln!(out, "| Average | {} |", fixed(&calc.averages))?;
        writeln!(out)?;

        writeln!(out, "### Step 4: Preference Variation Values")?;
        writeln!(out)?;
        matrix_header(&mut out, &ids)?;
        writeln!(out, "| Variation | {} |", fixed(&calc.preference_variations))?;
        writeln!(out, "| Deviation | {} |", fixed(&calc.deviations))?;
        writeln!(out)?;

        writeln!(out, "### Step 5: Criteria Weights")?;
        writeln!(out)?;
        matrix_header(&mut out, &ids)?;
        writeln!(out, "| Weight | {} |", fixed(&calc.weights))?;
        writeln!(out)?;

        writeln!(out, "### Step 6: Final PSI Values")?;
        writeln!(out)?;
        writeln!(out, "| Alternative | PSI Value |")?;
        writeln!(out, "|---|---:|")?;
        for (alternative, psi) in evaluation.alternatives.iter().zip(&calc.psi_values) {
            writeln!(out, "| {} | {} |", cell(&alternative.name), format4(*psi))?;
        }

        Ok(out)
    }
}

impl Default for MarkdownReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportExporter for MarkdownReportExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }

    async fn render(&self, evaluation: &Evaluation) -> Result<Vec<u8>, ExportError> {
        self.to_text(evaluation).map(String::into_bytes)
    }
}

fn matrix_header(out: &mut String, ids: &[String]) -> std::fmt::Result {
    writeln!(out, "| Alternative | {} |", ids.join(" | "))?;
    let aligns = vec!["---:"; ids.len()].join("|");
    writeln!(out, "|---|{}|", aligns)
}

fn fixed(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format4(*v))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Table cells cannot contain raw pipes or line breaks.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}
