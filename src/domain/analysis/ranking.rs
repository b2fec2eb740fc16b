//! Ranking Composer - orders alternatives by PSI value.

use serde::{Deserialize, Serialize};

use super::{Alternative, EngineError};

/// An alternative with its PSI value and 1-based rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: Alternative,
    pub psi_value: f64,
    pub rank: usize,
}

/// Pairs PSI values back with their alternatives and ranks them.
pub struct RankingComposer;

impl RankingComposer {
    /// Ranks alternatives by PSI value, highest first.
    ///
    /// `psi_values[i]` belongs to `alternatives[i]`. Ranks run 1..=m with no
    /// gaps or repeats: equal PSI values take consecutive ranks in their
    /// original input order.
    ///
    /// # Errors
    /// - `EngineError::NoAlternatives` when there is nothing to rank
    /// - `EngineError::LengthMismatch` when the two slices differ in length
    pub fn rank(
        alternatives: &[Alternative],
        psi_values: &[f64],
    ) -> Result<Vec<RankedAlternative>, EngineError> {
        if alternatives.len() != psi_values.len() {
            return Err(EngineError::LengthMismatch {
                alternatives: alternatives.len(),
                psi_values: psi_values.len(),
            });
        }
        if alternatives.is_empty() {
            return Err(EngineError::NoAlternatives);
        }

        let mut order: Vec<usize> = (0..alternatives.len()).collect();
        order.sort_by(|&a, &b| {
            psi_values[b]
                .total_cmp(&psi_values[a])
                .then_with(|| a.cmp(&b))
        });

        Ok(order
            .into_iter()
            .enumerate()
            .map(|(position, index)| RankedAlternative {
                alternative: alternatives[index].clone(),
                psi_value: psi_values[index],
                rank: position + 1,
            })
            .collect())
    }

    /// The top-ranked entry, if any.
    pub fn best(ranked: &[RankedAlternative]) -> Option<&RankedAlternative> {
        ranked.iter().find(|r| r.rank == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alts(names: &[&str]) -> Vec<Alternative> {
        names.iter().map(|n| Alternative::new(*n, *n)).collect()
    }

    fn ids(ranked: &[RankedAlternative]) -> Vec<&str> {
        ranked.iter().map(|r| r.alternative.id.as_str()).collect()
    }

    #[test]
    fn sorts_descending_by_psi() {
        let ranked = RankingComposer::rank(&alts(&["a", "b", "c"]), &[0.2, 0.9, 0.5]).unwrap();
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ranked[0].psi_value, 0.9);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = RankingComposer::rank(&alts(&["a", "b", "c"]), &[0.5, 1.0, 1.0]).unwrap();
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);

        let rank_of = |id: &str| ranked.iter().find(|r| r.alternative.id == id).unwrap().rank;
        assert_eq!((rank_of("a"), rank_of("b"), rank_of("c")), (3, 1, 2));
    }

    #[test]
    fn identical_values_rank_by_position() {
        let ranked = RankingComposer::rank(&alts(&["x", "y", "z"]), &[0.7, 0.7, 0.7]).unwrap();
        assert_eq!(ids(&ranked), vec!["x", "y", "z"]);
    }

    #[test]
    fn length_mismatch_fails_fast() {
        let result = RankingComposer::rank(&alts(&["a", "b"]), &[0.1]);
        assert_eq!(
            result,
            Err(EngineError::LengthMismatch {
                alternatives: 2,
                psi_values: 1
            })
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(RankingComposer::rank(&[], &[]), Err(EngineError::NoAlternatives));
    }

    #[test]
    fn result_does_not_alias_input() {
        let mut input = alts(&["a"]);
        let ranked = RankingComposer::rank(&input, &[0.3]).unwrap();
        input[0].name = "changed".to_string();
        assert_eq!(ranked[0].alternative.name, "a");
    }

    #[test]
    fn best_returns_rank_one() {
        let ranked = RankingComposer::rank(&alts(&["a", "b"]), &[0.1, 0.4]).unwrap();
        assert_eq!(RankingComposer::best(&ranked).unwrap().alternative.id, "b");
        assert!(RankingComposer::best(&[]).is_none());
    }
}
