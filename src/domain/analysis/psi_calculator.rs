//! PSI Calculator - the Preference Selection Index scoring pipeline.
//!
//! decision matrix -> normalize -> average -> preference variation ->
//! deviation -> weight -> weighted sum. Each stage consumes only the
//! previous stage's rounded output.

use serde::{Deserialize, Serialize};

use super::{Alternative, DecisionMatrix, EngineError, Normalizer, WeightDeriver};
use crate::domain::criteria::Criterion;
use crate::domain::foundation::round4;

/// Complete trace of one PSI computation.
///
/// Matrices are row-major with rows aligned to the input alternatives and
/// columns aligned to the input criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsiCalculation {
    pub decision_matrix: Vec<Vec<f64>>,
    pub normalized_matrix: Vec<Vec<f64>>,
    pub averages: Vec<f64>,
    pub preference_variations: Vec<f64>,
    pub deviations: Vec<f64>,
    pub weights: Vec<f64>,
    pub psi_values: Vec<f64>,
}

impl PsiCalculation {
    /// Number of alternatives scored.
    pub fn alternative_count(&self) -> usize {
        self.psi_values.len()
    }

    /// Number of criteria weighed.
    pub fn criteria_count(&self) -> usize {
        self.weights.len()
    }
}

/// Stateless PSI scoring engine.
pub struct PsiCalculator;

impl PsiCalculator {
    /// Runs the full PSI pipeline.
    ///
    /// # Errors
    /// - `EngineError::NoCriteria` when `criteria` is empty
    /// - `EngineError::NoAlternatives` when `alternatives` is empty
    ///
    /// Degenerate columns and a zero total deviation are absorbed with zero
    /// fallbacks and never produce `NaN` or infinities.
    pub fn calculate(
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<PsiCalculation, EngineError> {
        if criteria.is_empty() {
            return Err(EngineError::NoCriteria);
        }
        if alternatives.is_empty() {
            return Err(EngineError::NoAlternatives);
        }

        let decision_matrix = DecisionMatrix::build(criteria, alternatives);
        let normalized_matrix = Normalizer::normalize(&decision_matrix, criteria);

        let averages = WeightDeriver::averages(&normalized_matrix, criteria.len());
        let preference_variations =
            WeightDeriver::preference_variations(&normalized_matrix, &averages);
        let deviations = WeightDeriver::deviations(&preference_variations);
        let weights = WeightDeriver::weights(&deviations);

        let psi_values = Self::aggregate(&normalized_matrix, &weights);

        Ok(PsiCalculation {
            decision_matrix: decision_matrix.into_rows(),
            normalized_matrix,
            averages,
            preference_variations,
            deviations,
            weights,
            psi_values,
        })
    }

    /// Weighted sum of each normalized row, rounded to four decimals.
    pub fn aggregate(normalized: &[Vec<f64>], weights: &[f64]) -> Vec<f64> {
        normalized
            .iter()
            .map(|row| {
                let sum: f64 = row.iter().zip(weights).map(|(value, w)| value * w).sum();
                round4(sum)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::RankingComposer;
    use crate::domain::criteria::{CriteriaCatalog, Polarity};

    fn benefit(id: &str) -> Criterion {
        Criterion::new(id, id, Polarity::Benefit).with_option("x", 1.0)
    }

    fn cost(id: &str) -> Criterion {
        Criterion::new(id, id, Polarity::Cost).with_option("x", 1.0)
    }

    fn alternatives(criterion_id: &str, values: &[f64]) -> Vec<Alternative> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                Alternative::new(format!("a{}", i), format!("Alt {}", i)).with_score(criterion_id, *v)
            })
            .collect()
    }

    #[test]
    fn empty_criteria_is_rejected() {
        let result = PsiCalculator::calculate(&[], &alternatives("C1", &[1.0]));
        assert_eq!(result, Err(EngineError::NoCriteria));
    }

    #[test]
    fn empty_alternatives_is_rejected() {
        let result = PsiCalculator::calculate(&[benefit("C1")], &[]);
        assert_eq!(result, Err(EngineError::NoAlternatives));
    }

    #[test]
    fn single_benefit_criterion_trace() {
        let calc =
            PsiCalculator::calculate(&[benefit("C1")], &alternatives("C1", &[2.0, 4.0, 4.0]))
                .unwrap();

        assert_eq!(calc.decision_matrix, vec![vec![2.0], vec![4.0], vec![4.0]]);
        assert_eq!(calc.normalized_matrix, vec![vec![0.5], vec![1.0], vec![1.0]]);
        assert_eq!(calc.averages, vec![0.8333]);
        assert_eq!(calc.preference_variations, vec![0.1667]);
        assert_eq!(calc.deviations, vec![0.8333]);
        assert_eq!(calc.weights, vec![1.0]);
        assert_eq!(calc.psi_values, vec![0.5, 1.0, 1.0]);
    }

    #[test]
    fn single_cost_criterion_maps_zero_to_zero() {
        let calc =
            PsiCalculator::calculate(&[cost("C1")], &alternatives("C1", &[10.0, 20.0, 0.0]))
                .unwrap();
        assert_eq!(calc.normalized_matrix, vec![vec![1.0], vec![0.5], vec![0.0]]);
    }

    #[test]
    fn all_zero_benefit_column_stays_finite() {
        let calc =
            PsiCalculator::calculate(&[benefit("C1")], &alternatives("C1", &[0.0, 0.0])).unwrap();

        assert_eq!(calc.normalized_matrix, vec![vec![0.0], vec![0.0]]);
        assert_eq!(calc.averages, vec![0.0]);
        assert_eq!(calc.deviations, vec![1.0]);
        assert_eq!(calc.weights, vec![1.0]);
        assert_eq!(calc.psi_values, vec![0.0, 0.0]);
        assert!(calc.psi_values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn zero_total_deviation_zeroes_weights_and_psi() {
        // Variations 0.0 and 2.0 give deviations 1.0 and -1.0, summing to zero.
        let criteria = [benefit("C1"), benefit("C2")];
        let alts = vec![
            Alternative::new("a", "A").with_score("C1", 1.0).with_score("C2", 0.0),
            Alternative::new("b", "B").with_score("C1", 1.0).with_score("C2", 0.0),
            Alternative::new("c", "C").with_score("C1", 1.0).with_score("C2", 0.0),
            Alternative::new("d", "D").with_score("C1", 1.0).with_score("C2", 0.0),
            Alternative::new("e", "E").with_score("C1", 1.0).with_score("C2", 1.0),
            Alternative::new("f", "F").with_score("C1", 1.0).with_score("C2", 1.0),
            Alternative::new("g", "G").with_score("C1", 1.0).with_score("C2", 1.0),
            Alternative::new("h", "H").with_score("C1", 1.0).with_score("C2", 1.0),
        ];

        let calc = PsiCalculator::calculate(&criteria, &alts).unwrap();
        assert_eq!(calc.preference_variations, vec![0.0, 2.0]);
        assert_eq!(calc.deviations, vec![1.0, -1.0]);
        assert_eq!(calc.weights, vec![0.0, 0.0]);
        assert!(calc.psi_values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn two_criteria_mixed_polarity() {
        let criteria = [benefit("C1"), cost("C2")];
        let alts = vec![
            Alternative::new("a", "A").with_score("C1", 3.0).with_score("C2", 1.0),
            Alternative::new("b", "B").with_score("C1", 5.0).with_score("C2", 4.0),
        ];

        let calc = PsiCalculator::calculate(&criteria, &alts).unwrap();
        assert_eq!(calc.normalized_matrix, vec![vec![0.6, 1.0], vec![1.0, 0.25]]);
        assert_eq!(calc.averages, vec![0.8, 0.625]);
        assert_eq!(calc.preference_variations, vec![0.08, 0.2813]);
        assert_eq!(calc.deviations, vec![0.92, 0.7187]);
        assert_eq!(calc.weights, vec![0.5614, 0.4386]);
        assert_eq!(calc.psi_values, vec![0.7754, 0.6711]);
    }

    #[test]
    fn missing_scores_count_as_zero() {
        let criteria = [benefit("C1"), benefit("C2")];
        let alts = vec![
            Alternative::new("a", "A").with_score("C1", 2.0),
            Alternative::new("b", "B").with_score("C1", 4.0).with_score("C2", 4.0),
        ];

        let calc = PsiCalculator::calculate(&criteria, &alts).unwrap();
        assert_eq!(calc.decision_matrix, vec![vec![2.0, 0.0], vec![4.0, 4.0]]);
        assert_eq!(calc.normalized_matrix, vec![vec![0.5, 0.0], vec![1.0, 1.0]]);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let catalog = CriteriaCatalog::job_offers();
        let alts = vec![
            Alternative::new("a", "A")
                .with_score("C1", 3.0)
                .with_score("C4", 2.0)
                .with_score("C6", 5.0),
            Alternative::new("b", "B")
                .with_score("C1", 4.0)
                .with_score("C4", 1.0)
                .with_score("C6", 3.0),
        ];

        let first = PsiCalculator::calculate(catalog.criteria(), &alts).unwrap();
        let second = PsiCalculator::calculate(catalog.criteria(), &alts).unwrap();
        let bits = |c: &PsiCalculation| c.psi_values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn identical_alternatives_tie_and_rank_by_position() {
        let catalog = CriteriaCatalog::job_offers();
        let scores = [4.0, 3.0, 5.0, 2.0, 3.0, 2.0, 4.0, 3.0, 4.0, 5.0];
        let twin = |id: &str, name: &str| {
            catalog
                .criteria()
                .iter()
                .zip(scores)
                .fold(Alternative::new(id, name), |alt, (c, v)| {
                    alt.with_score(c.id.as_str(), v)
                })
        };

        let forward = vec![twin("1", "Acme"), twin("2", "Globex")];
        let calc = PsiCalculator::calculate(catalog.criteria(), &forward).unwrap();
        assert_eq!(calc.psi_values[0], calc.psi_values[1]);
        let ranked = RankingComposer::rank(&forward, &calc.psi_values).unwrap();
        let order: Vec<_> = ranked
            .iter()
            .map(|r| (r.rank, r.alternative.name.as_str()))
            .collect();
        assert_eq!(order, vec![(1, "Acme"), (2, "Globex")]);

        let reversed: Vec<_> = forward.into_iter().rev().collect();
        let calc = PsiCalculator::calculate(catalog.criteria(), &reversed).unwrap();
        assert_eq!(calc.psi_values[0], calc.psi_values[1]);
        let ranked = RankingComposer::rank(&reversed, &calc.psi_values).unwrap();
        let order: Vec<_> = ranked
            .iter()
            .map(|r| (r.rank, r.alternative.name.as_str()))
            .collect();
        assert_eq!(order, vec![(1, "Globex"), (2, "Acme")]);
    }

    #[test]
    fn aggregate_is_weighted_row_sum() {
        let psi = PsiCalculator::aggregate(&[vec![0.5, 1.0], vec![1.0, 0.0]], &[0.25, 0.75]);
        assert_eq!(psi, vec![0.875, 0.25]);
    }

    #[test]
    fn counts_reflect_dimensions() {
        let calc = PsiCalculator::calculate(
            &[benefit("C1"), cost("C2")],
            &alternatives("C1", &[1.0, 2.0, 3.0]),
        )
        .unwrap();
        assert_eq!(calc.alternative_count(), 3);
        assert_eq!(calc.criteria_count(), 2);
    }
}
