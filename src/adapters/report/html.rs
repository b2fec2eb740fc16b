//! HTML report exporter.
//!
//! Converts the Markdown report to a standalone page with `pulldown-cmark`.
//! Pure Rust, always available.

use async_trait::async_trait;
use pulldown_cmark::{html, Options, Parser};

use super::MarkdownReportExporter;
use crate::domain::evaluation::Evaluation;
use crate::ports::{ExportError, ReportExporter, ReportFormat};

const FALLBACK_TITLE: &str = "PSI Report";

#[derive(Debug, Clone, Copy)]
pub struct HtmlReportExporter {
    markdown: MarkdownReportExporter,
    include_default_css: bool,
}

impl HtmlReportExporter {
    pub fn new() -> Self {
        Self {
            markdown: MarkdownReportExporter::new(),
            include_default_css: true,
        }
    }

    /// Use a different Markdown source, e.g. `summary_only()`.
    pub fn with_markdown(mut self, markdown: MarkdownReportExporter) -> Self {
        self.markdown = markdown;
        self
    }

    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    pub fn to_text(&self, evaluation: &Evaluation) -> Result<String, ExportError> {
        let markdown = self.markdown.to_text(evaluation)?;
        Ok(self.markdown_to_html(&markdown))
    }

    /// Convert Markdown to a complete HTML document.
    pub fn markdown_to_html(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(markdown, options);

        let mut body = String::new();
        html::push_html(&mut body, parser);

        let css = if self.include_default_css {
            DEFAULT_CSS
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="psi-report">
{body}
    </article>
</body>
</html>
"#,
            title = html_escape(&extract_title(markdown)),
            css = css,
            body = body
        )
    }
}

impl Default for HtmlReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportExporter for HtmlReportExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    async fn render(&self, evaluation: &Evaluation) -> Result<Vec<u8>, ExportError> {
        self.to_text(evaluation).map(String::into_bytes)
    }
}

/// First level-one heading, or a fallback.
fn extract_title(markdown: &str) -> String {
    markdown
        .lines()
        .find_map(|line| line.trim().strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const DEFAULT_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    line-height: 1.5;
    color: #1f2937;
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    border-bottom: 2px solid #2563eb;
    padding-bottom: 0.5rem;
}

h2 {
    border-bottom: 1px solid #e5e7eb;
    margin-top: 2rem;
}

table {
    border-collapse: collapse;
    margin: 1em 0;
}

th, td {
    padding: 0.35rem 0.75rem;
    border: 1px solid #e5e7eb;
}

th {
    background-color: #f3f4f6;
}

tr:nth-child(even) {
    background-color: #f9fafb;
}

@media print {
    body {
        font-size: 11pt;
        padding: 0;
    }

    table {
        page-break-inside: avoid;
    }
}
"#;
