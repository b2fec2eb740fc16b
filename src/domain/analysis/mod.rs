//! Analysis Module - the PSI scoring engine and ranking.
//!
//! # Components
//!
//! - `DecisionMatrix` - raw scores laid out alternatives x criteria
//! - `Normalizer` - polarity-aware normalization (Benefit / Cost)
//! - `WeightDeriver` - averages, preference variation, deviation, weights
//! - `PsiCalculator` - the full pipeline producing a `PsiCalculation` trace
//! - `RankingComposer` - PSI-descending ranking with input-order tie-break
//! - `IntakeValidator` - completeness checks for evaluation requests
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Every intermediate value is rounded
//! to four decimals as soon as it is produced, and degenerate inputs resolve
//! to zeros instead of errors. Only structural problems (no criteria, no
//! alternatives, misaligned PSI values) are reported as `EngineError`.

mod alternative;
mod decision_matrix;
mod errors;
mod intake;
mod normalizer;
mod psi_calculator;
mod ranking;
mod weighting;

pub use alternative::Alternative;
pub use decision_matrix::DecisionMatrix;
pub use errors::EngineError;
pub use intake::IntakeValidator;
pub use normalizer::Normalizer;
pub use psi_calculator::{PsiCalculation, PsiCalculator};
pub use ranking::{RankedAlternative, RankingComposer};
pub use weighting::WeightDeriver;
