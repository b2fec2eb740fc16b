//! Evaluation history configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ValidationError;
use crate::adapters::{FileEvaluationHistory, InMemoryEvaluationHistory};
use crate::ports::EvaluationHistory;

/// Largest history the application will keep.
pub const MAX_HISTORY_CAPACITY: usize = 1000;

/// Where evaluations are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryBackend {
    #[default]
    Memory,
    File,
}

/// Evaluation history configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub backend: HistoryBackend,

    /// JSON document used by the file backend
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Number of evaluations retained, oldest evicted first
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl HistoryConfig {
    /// Validate history configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 || self.capacity > MAX_HISTORY_CAPACITY {
            return Err(ValidationError::InvalidHistoryCapacity(self.capacity));
        }
        if self.backend == HistoryBackend::File && self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingHistoryPath);
        }
        Ok(())
    }

    /// Build the configured history adapter
    pub fn build(&self) -> Arc<dyn EvaluationHistory> {
        match self.backend {
            HistoryBackend::Memory => Arc::new(InMemoryEvaluationHistory::new(self.capacity)),
            HistoryBackend::File => Arc::new(FileEvaluationHistory::new(&self.path, self.capacity)),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            backend: HistoryBackend::default(),
            path: default_path(),
            capacity: default_capacity(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("./data/history.json")
}

fn default_capacity() -> usize {
    10
}
