//! psi-ranker - rank alternatives with the Preference Selection Index.
//!
//! ```text
//! psi-ranker <request.(yaml|json)> [csv|json|markdown|html|pdf] [-o <file>]
//! ```
//!
//! Reads the request, scores it against the configured criteria catalog,
//! stores the evaluation in history, and writes the report to stdout or to
//! the output file.

use std::path::PathBuf;

use clap::Parser;
use tokio::io::AsyncWriteExt;

use psi_ranker::application::{
    EvaluateAlternativesHandler, EvaluationRequest, ExportEvaluationHandler, ExportEvaluationQuery,
};
use psi_ranker::config::AppConfig;
use psi_ranker::ports::ReportFormat;

/// Rank alternatives with the Preference Selection Index.
#[derive(Debug, Parser)]
#[command(name = "psi-ranker", version, about)]
struct Cli {
    /// Request document holding `respondent` and `alternatives` (YAML or JSON).
    input: PathBuf,

    /// Report format: csv, json, markdown, html, or pdf.
    #[arg(default_value = "markdown")]
    format: ReportFormat,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init_tracing();

    let catalog = config.catalog.load().await?;
    let history = config.history.build();
    tracing::debug!(
        criteria = catalog.len(),
        backend = ?config.history.backend,
        capacity = history.capacity(),
        "Starting evaluation"
    );

    let request = EvaluationRequest::load(&cli.input).await?;
    let evaluation = EvaluateAlternativesHandler::new(history.clone())
        .handle(request.into_command(catalog))
        .await?;

    let report = ExportEvaluationHandler::new(history)
        .handle(ExportEvaluationQuery {
            evaluation_id: evaluation.id,
            format: cli.format,
        })
        .await?;

    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, &report.content).await?;
            tracing::info!(path = %path.display(), format = %report.format, "Report written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&report.content).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_defaults_to_markdown() {
        let cli = Cli::try_parse_from(["psi-ranker", "request.yaml"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("request.yaml"));
        assert_eq!(cli.format, ReportFormat::Markdown);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn parses_format_and_output() {
        let cli =
            Cli::try_parse_from(["psi-ranker", "request.json", "PDF", "-o", "report.pdf"]).unwrap();
        assert_eq!(cli.format, ReportFormat::Pdf);
        assert_eq!(cli.output, Some(PathBuf::from("report.pdf")));
    }

    #[test]
    fn rejects_unknown_format_and_missing_input() {
        assert!(Cli::try_parse_from(["psi-ranker", "request.yaml", "xlsx"]).is_err());
        assert!(Cli::try_parse_from(["psi-ranker"]).is_err());
    }
}
