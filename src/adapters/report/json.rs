//! JSON report exporter - the full evaluation as pretty-printed JSON.

use async_trait::async_trait;

use crate::domain::evaluation::Evaluation;
use crate::ports::{ExportError, ReportExporter, ReportFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportExporter;

impl JsonReportExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn to_text(&self, evaluation: &Evaluation) -> Result<String, ExportError> {
        serde_json::to_string_pretty(evaluation)
            .map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl ReportExporter for JsonReportExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    async fn render(&self, evaluation: &Evaluation) -> Result<Vec<u8>, ExportError> {
        self.to_text(evaluation).map(String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Alternative;
    use crate::domain::criteria::{Criterion, Polarity};
    use crate::domain::evaluation::RespondentDetails;

    #[tokio::test]
    async fn rendered_json_parses_back_into_evaluation() {
        let evaluation = Evaluation::compute(
            RespondentDetails::new("Dana"),
            vec![Criterion::new("C1", "Salary", Polarity::Benefit).with_option("x", 1.0)],
            vec![
                Alternative::new("1", "Acme").with_score("C1", 2.0),
                Alternative::new("2", "Globex").with_score("C1", 4.0),
            ],
        )
        .unwrap();

        let bytes = JsonReportExporter::new().render(&evaluation).await.unwrap();
        let json = String::from_utf8(bytes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["respondent"]["name"], "Dana");
        assert_eq!(value["ranked_alternatives"][0]["alternative"]["name"], "Globex");
        assert_eq!(value["ranked_alternatives"][0]["rank"], 1);
        assert_eq!(value["calculation"]["weights"][0], 1.0);

        let restored: Evaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, evaluation);
    }
}
