//! File-based Evaluation History Adapter
//!
//! Stores the whole history as one JSON document, newest evaluation first.
//! A missing file reads as an empty history.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::evaluation::{Evaluation, EvaluationSummary};
use crate::domain::foundation::EvaluationId;
use crate::ports::{EvaluationHistory, HistoryError};

/// File-backed bounded evaluation history
#[derive(Debug, Clone)]
pub struct FileEvaluationHistory {
    path: PathBuf,
    capacity: usize,
    // Serializes read-modify-write cycles on the file.
    lock: Arc<Mutex<()>>,
}

impl FileEvaluationHistory {
    /// Create a history stored at `path`
    ///
    /// # Example
    /// ```ignore
    /// let history = FileEvaluationHistory::new("./data/history.json", 10);
    /// ```
    pub fn new<P: AsRef<Path>>(path: P, capacity: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity: capacity.max(1),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the history document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Evaluation>, HistoryError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HistoryError::IoError(e.to_string())),
        };

        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&json).map_err(|e| HistoryError::DeserializationFailed(e.to_string()))
    }

    async fn write_all(&self, entries: &[Evaluation]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| HistoryError::IoError(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| HistoryError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| HistoryError::IoError(e.to_string()))
    }
}

#[async_trait]
impl EvaluationHistory for FileEvaluationHistory {
    async fn save(&self, evaluation: &Evaluation) -> Result<Vec<EvaluationId>, HistoryError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read_all().await?;
        entries.retain(|e| e.id != evaluation.id);
        entries.insert(0, evaluation.clone());

        let evicted = if entries.len() > self.capacity {
            entries
                .split_off(self.capacity)
                .into_iter()
                .rev()
                .map(|e| e.id)
                .collect()
        } else {
            Vec::new()
        };

        self.write_all(&entries).await?;
        Ok(evicted)
    }

    async fn list(&self) -> Result<Vec<EvaluationSummary>, HistoryError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_all().await?;
        Ok(entries.iter().map(Evaluation::summary).collect())
    }

    async fn get(&self, id: EvaluationId) -> Result<Evaluation, HistoryError> {
        let _guard = self.lock.lock().await;
        self.read_all()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(HistoryError::NotFound(id))
    }

    async fn delete(&self, id: EvaluationId) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read_all().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(HistoryError::NotFound(id));
        }

        self.write_all(&entries).await
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
