//! EvaluationRequest - the document a caller submits for evaluation.

use serde::Deserialize;
use std::path::Path;

use super::EvaluateAlternativesCommand;
use crate::domain::analysis::Alternative;
use crate::domain::criteria::CriteriaCatalog;
use crate::domain::evaluation::{EvaluationError, RespondentDetails};

/// Respondent details plus the alternatives to rank.
///
/// ```yaml
/// respondent:
///   name: Dana
/// alternatives:
///   - id: "1"
///     name: Acme
///     scores: { C1: 4, C2: 2 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub respondent: RespondentDetails,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl EvaluationRequest {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EvaluationError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| EvaluationError::infrastructure(format!("invalid request: {}", e)))
    }

    pub fn from_json_str(json: &str) -> Result<Self, EvaluationError> {
        serde_json::from_str(json)
            .map_err(|e| EvaluationError::infrastructure(format!("invalid request: {}", e)))
    }

    /// Read a request file; `.yaml`/`.yml` as YAML, otherwise JSON.
    pub async fn load(path: &Path) -> Result<Self, EvaluationError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            EvaluationError::infrastructure(format!("{}: {}", path.display(), e))
        })?;

        let is_yaml = matches!(
            path.extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase)
                .as_deref(),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Pair the request with a catalog snapshot.
    pub fn into_command(self, catalog: CriteriaCatalog) -> EvaluateAlternativesCommand {
        EvaluateAlternativesCommand {
            respondent: self.respondent,
            catalog,
            alternatives: self.alternatives,
        }
    }
}
