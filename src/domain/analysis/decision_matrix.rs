//! Decision Matrix - raw scores laid out alternatives x criteria.

use serde::{Deserialize, Serialize};

use super::Alternative;
use crate::domain::criteria::Criterion;

/// Row-major m x n matrix; rows follow alternative order, columns criterion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Looks up every alternative's score for every criterion.
    ///
    /// Absent and non-finite scores become `0.0`.
    pub fn build(criteria: &[Criterion], alternatives: &[Alternative]) -> Self {
        let rows = alternatives
            .iter()
            .map(|alt| {
                criteria
                    .iter()
                    .map(|c| match alt.score(&c.id) {
                        Some(v) if v.is_finite() => v,
                        _ => 0.0,
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Wraps already-laid-out rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns column `j` top to bottom; short rows contribute `0.0`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.get(j).copied().unwrap_or(0.0))
            .collect()
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}
