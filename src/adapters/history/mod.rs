//! Evaluation history adapters.
//!
//! - `InMemoryEvaluationHistory` - Process-local, for tests and one-shot runs
//! - `FileEvaluationHistory` - Single JSON document on disk

mod file;
mod in_memory;

pub use file::FileEvaluationHistory;
pub use in_memory::{InMemoryEvaluationHistory, DEFAULT_HISTORY_CAPACITY};
