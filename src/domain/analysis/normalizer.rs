//! Normalizer - polarity-aware scaling of the decision matrix into [0, 1].

use super::DecisionMatrix;
use crate::domain::criteria::{Criterion, Polarity};
use crate::domain::foundation::round4;

/// Column-wise normalization of raw scores.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes every column according to its criterion's polarity.
    ///
    /// # Algorithm
    /// - Benefit: `value / max(column)`, or 0 when the max is 0
    /// - Cost: `min(positive values of column) / value`, or 0 when the value is 0
    ///
    /// Every cell is rounded to four decimals as it is produced.
    ///
    /// # Edge Cases
    /// - All-zero Benefit column: all zeros
    /// - Cost column without a strictly positive value: all zeros
    /// - Criteria beyond the matrix width read their column as zeros
    pub fn normalize(matrix: &DecisionMatrix, criteria: &[Criterion]) -> Vec<Vec<f64>> {
        let mut normalized = vec![vec![0.0; criteria.len()]; matrix.row_count()];

        for (j, criterion) in criteria.iter().enumerate() {
            let column = matrix.column(j);
            let scaled = match criterion.polarity {
                Polarity::Benefit => Self::benefit_column(&column),
                Polarity::Cost => Self::cost_column(&column),
            };
            for (row, value) in normalized.iter_mut().zip(scaled) {
                row[j] = value;
            }
        }

        normalized
    }

    /// Indices of columns that hit a zero fallback for the whole column.
    pub fn degenerate_columns(matrix: &DecisionMatrix, criteria: &[Criterion]) -> Vec<usize> {
        criteria
            .iter()
            .enumerate()
            .filter(|(j, criterion)| {
                let column = matrix.column(*j);
                match criterion.polarity {
                    Polarity::Benefit => Self::column_max(&column).map_or(true, |max| max == 0.0),
                    Polarity::Cost => Self::positive_min(&column).is_none(),
                }
            })
            .map(|(j, _)| j)
            .collect()
    }

    fn benefit_column(column: &[f64]) -> Vec<f64> {
        match Self::column_max(column) {
            Some(max) if max != 0.0 => column.iter().map(|v| round4(v / max)).collect(),
            _ => vec![0.0; column.len()],
        }
    }

    fn cost_column(column: &[f64]) -> Vec<f64> {
        let Some(min) = Self::positive_min(column) else {
            return vec![0.0; column.len()];
        };
        column
            .iter()
            .map(|&v| if v == 0.0 { 0.0 } else { round4(min / v) })
            .collect()
    }

    fn column_max(column: &[f64]) -> Option<f64> {
        column.iter().copied().reduce(f64::max)
    }

    fn positive_min(column: &[f64]) -> Option<f64> {
        column
            .iter()
            .copied()
            .filter(|v| *v > 0.0)
            .reduce(f64::min)
    }
}
