//! Evaluation - the full record of one ranking run.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    Alternative, EngineError, PsiCalculation, PsiCalculator, RankedAlternative, RankingComposer,
};
use crate::domain::criteria::Criterion;
use crate::domain::foundation::{EvaluationId, Timestamp};

/// Who the evaluation was run for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentDetails {
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub location: String,
}

impl RespondentDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Immutable result of scoring and ranking a set of alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: EvaluationId,
    pub respondent: RespondentDetails,
    /// Criteria snapshot the evaluation was computed against.
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    pub calculation: PsiCalculation,
    pub ranked_alternatives: Vec<RankedAlternative>,
    pub created_at: Timestamp,
}

impl Evaluation {
    /// Scores and ranks `alternatives` against the `criteria` snapshot.
    pub fn compute(
        respondent: RespondentDetails,
        criteria: Vec<Criterion>,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, EngineError> {
        let calculation = PsiCalculator::calculate(&criteria, &alternatives)?;
        let ranked_alternatives = RankingComposer::rank(&alternatives, &calculation.psi_values)?;

        Ok(Self {
            id: EvaluationId::new(),
            respondent,
            criteria,
            alternatives,
            calculation,
            ranked_alternatives,
            created_at: Timestamp::now(),
        })
    }

    /// The rank-1 alternative.
    pub fn top_alternative(&self) -> Option<&RankedAlternative> {
        RankingComposer::best(&self.ranked_alternatives)
    }

    /// Condensed view for history listings.
    pub fn summary(&self) -> EvaluationSummary {
        EvaluationSummary {
            id: self.id,
            respondent: self.respondent.clone(),
            created_at: self.created_at,
            top_alternative: self
                .top_alternative()
                .map(|r| r.alternative.name.clone())
                .unwrap_or_default(),
            alternatives_count: self.alternatives.len(),
        }
    }
}

/// One line of the evaluation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub id: EvaluationId,
    pub respondent: RespondentDetails,
    pub created_at: Timestamp,
    pub top_alternative: String,
    pub alternatives_count: usize,
}
