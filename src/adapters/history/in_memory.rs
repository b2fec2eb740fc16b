//! In-Memory Evaluation History Adapter
//!
//! Keeps evaluations in memory, newest first.
//! Useful for testing and for one-shot CLI runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::evaluation::{Evaluation, EvaluationSummary};
use crate::domain::foundation::EvaluationId;
use crate::ports::{EvaluationHistory, HistoryError};

/// Default number of evaluations retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// In-memory bounded evaluation history
#[derive(Debug, Clone)]
pub struct InMemoryEvaluationHistory {
    entries: Arc<RwLock<VecDeque<Evaluation>>>,
    capacity: usize,
}

impl InMemoryEvaluationHistory {
    /// Create a history holding at most `capacity` evaluations
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Clear all stored evaluations (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Get the number of stored evaluations
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for InMemoryEvaluationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[async_trait]
impl EvaluationHistory for InMemoryEvaluationHistory {
    async fn save(&self, evaluation: &Evaluation) -> Result<Vec<EvaluationId>, HistoryError> {
        let mut entries = self.entries.write().await;
        entries.retain(|e| e.id != evaluation.id);
        entries.push_front(evaluation.clone());

        let mut evicted = Vec::new();
        while entries.len() > self.capacity {
            if let Some(oldest) = entries.pop_back() {
                evicted.push(oldest.id);
            }
        }
        Ok(evicted)
    }

    async fn list(&self) -> Result<Vec<EvaluationSummary>, HistoryError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().map(Evaluation::summary).collect())
    }

    async fn get(&self, id: EvaluationId) -> Result<Evaluation, HistoryError> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(HistoryError::NotFound(id))
    }

    async fn delete(&self, id: EvaluationId) -> Result<(), HistoryError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(HistoryError::NotFound(id));
        }
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
