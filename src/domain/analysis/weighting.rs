//! Weight derivation from the dispersion of normalized scores.
//!
//! Criteria on which the alternatives differ more get a larger preference
//! variation; `1 - variation` becomes the unnormalized weight.

use crate::domain::foundation::round4;

/// Per-criterion statistics over a normalized matrix.
pub struct WeightDeriver;

impl WeightDeriver {
    /// Column means, rounded to four decimals.
    ///
    /// Returns zeros when the matrix has no rows.
    pub fn averages(normalized: &[Vec<f64>], criteria_count: usize) -> Vec<f64> {
        let m = normalized.len();
        (0..criteria_count)
            .map(|j| {
                if m == 0 {
                    return 0.0;
                }
                let sum: f64 = normalized.iter().map(|row| cell(row, j)).sum();
                round4(sum / m as f64)
            })
            .collect()
    }

    /// Sum of squared differences from the column mean, rounded to four decimals.
    pub fn preference_variations(normalized: &[Vec<f64>], averages: &[f64]) -> Vec<f64> {
        averages
            .iter()
            .enumerate()
            .map(|(j, avg)| {
                let sum: f64 = normalized
                    .iter()
                    .map(|row| (cell(row, j) - avg).powi(2))
                    .sum();
                round4(sum)
            })
            .collect()
    }

    /// `1 - variation`, rounded to four decimals. May be negative.
    pub fn deviations(preference_variations: &[f64]) -> Vec<f64> {
        preference_variations
            .iter()
            .map(|pv| round4(1.0 - pv))
            .collect()
    }

    /// Each deviation's share of the total, rounded to four decimals.
    ///
    /// A zero total yields all-zero weights. Rounded weights are not
    /// re-normalized, so their sum may drift from 1.0 by the rounding error.
    pub fn weights(deviations: &[f64]) -> Vec<f64> {
        // Deviations are four-decimal values; rounding the sum removes
        // float noise so an exact zero total is detected.
        let total = round4(deviations.iter().sum());
        if total == 0.0 {
            return vec![0.0; deviations.len()];
        }
        deviations.iter().map(|d| round4(d / total)).collect()
    }
}

fn cell(row: &[f64], j: usize) -> f64 {
    row.get(j).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_are_rounded_column_means() {
        let normalized = vec![vec![0.5, 1.0], vec![1.0, 0.0], vec![1.0, 0.5]];
        assert_eq!(WeightDeriver::averages(&normalized, 2), vec![0.8333, 0.5]);
    }

    #[test]
    fn averages_of_empty_matrix_are_zero() {
        assert_eq!(WeightDeriver::averages(&[], 3), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn preference_variation_uses_rounded_average() {
        let normalized = vec![vec![0.5], vec![1.0], vec![1.0]];
        let averages = WeightDeriver::averages(&normalized, 1);
        let variations = WeightDeriver::preference_variations(&normalized, &averages);
        assert_eq!(variations, vec![0.1667]);
    }

    #[test]
    fn uniform_column_has_zero_variation() {
        let normalized = vec![vec![1.0], vec![1.0]];
        let variations = WeightDeriver::preference_variations(&normalized, &[1.0]);
        assert_eq!(variations, vec![0.0]);
    }

    #[test]
    fn deviation_can_go_negative() {
        assert_eq!(WeightDeriver::deviations(&[0.1667, 1.25]), vec![0.8333, -0.25]);
    }

    #[test]
    fn weights_are_shares_of_total_deviation() {
        let weights = WeightDeriver::weights(&[1.0, 0.5, 0.5]);
        assert_eq!(weights, vec![0.5, 0.25, 0.25]);
    }

    #[test]
    fn single_weight_is_one() {
        assert_eq!(WeightDeriver::weights(&[0.8333]), vec![1.0]);
    }

    #[test]
    fn zero_total_deviation_gives_zero_weights() {
        assert_eq!(WeightDeriver::weights(&[0.5, -0.5]), vec![0.0, 0.0]);
        assert_eq!(WeightDeriver::weights(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn float_noise_in_total_still_counts_as_zero() {
        // 0.1 + 0.2 - 0.3 is not exactly zero in binary floating point.
        assert_eq!(WeightDeriver::weights(&[0.1, 0.2, -0.3]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn rounded_weights_may_drift_from_one() {
        let weights = WeightDeriver::weights(&[1.0, 1.0, 1.0]);
        assert_eq!(weights, vec![0.3333, 0.3333, 0.3333]);
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() <= 0.0004 * 3.0);
    }
}
