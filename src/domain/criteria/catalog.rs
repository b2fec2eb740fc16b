//! Criteria Catalog - ordered, uniquely keyed set of active criteria.
//!
//! Edits always go through the catalog so the id-uniqueness and
//! per-criterion invariants hold for every snapshot handed to the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::{Criterion, JOB_OFFER_CRITERIA};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by catalog edits and loading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Criterion not found: {0}")]
    NotFound(String),

    #[error("Criteria ID \"{0}\" already exists")]
    DuplicateId(String),

    #[error("Failed to parse criteria catalog: {0}")]
    Parse(String),

    #[error("Failed to read criteria catalog: {0}")]
    Io(String),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Validation(_) => ErrorCode::ValidationFailed,
            CatalogError::NotFound(_) => ErrorCode::CriterionNotFound,
            CatalogError::DuplicateId(_) => ErrorCode::DuplicateId,
            CatalogError::Parse(_) => ErrorCode::SerializationError,
            CatalogError::Io(_) => ErrorCode::StorageError,
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Whether an upsert added a new criterion or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
}

/// Ordered collection of criteria with unique ids.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CriteriaCatalog {
    criteria: Vec<Criterion>,
}

impl CriteriaCatalog {
    /// Builds a catalog, validating each criterion and id uniqueness.
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for criterion in &criteria {
            criterion.validate()?;
            if !seen.insert(criterion.id.as_str()) {
                return Err(CatalogError::DuplicateId(criterion.id.clone()));
            }
        }
        Ok(Self { criteria })
    }

    /// The built-in job-offer catalog.
    pub fn job_offers() -> Self {
        Self {
            criteria: JOB_OFFER_CRITERIA.clone(),
        }
    }

    /// Parses a YAML document holding a list of criteria.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let criteria: Vec<Criterion> =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(criteria)
    }

    /// Parses a JSON document holding a list of criteria.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let criteria: Vec<Criterion> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(criteria)
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn ids(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns an owned copy of the criteria for one computation.
    ///
    /// The engine works on the snapshot, so later edits to the catalog
    /// never affect a computation already under way.
    pub fn snapshot(&self) -> Vec<Criterion> {
        self.criteria.clone()
    }

    /// Adds a criterion, or replaces the one with the same id in place.
    pub fn upsert(&mut self, criterion: Criterion) -> Result<UpsertOutcome, CatalogError> {
        criterion.validate()?;
        match self.position(&criterion.id) {
            Some(index) => {
                self.criteria[index] = criterion;
                Ok(UpsertOutcome::Updated)
            }
            None => {
                self.criteria.push(criterion);
                Ok(UpsertOutcome::Added)
            }
        }
    }

    /// Replaces the criterion stored under `id`, allowing the id itself to change.
    ///
    /// Fails if the new id is already used by a different criterion.
    pub fn replace(&mut self, id: &str, criterion: Criterion) -> Result<(), CatalogError> {
        criterion.validate()?;
        let index = self
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let clashes = self
            .criteria
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.id == criterion.id);
        if clashes {
            return Err(CatalogError::DuplicateId(criterion.id));
        }

        self.criteria[index] = criterion;
        Ok(())
    }

    /// Removes a criterion by id.
    pub fn remove(&mut self, id: &str) -> Result<Criterion, CatalogError> {
        let index = self
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        Ok(self.criteria.remove(index))
    }

    /// Removes every criterion whose id is listed; returns how many were removed.
    pub fn remove_many(&mut self, ids: &[&str]) -> usize {
        let before = self.criteria.len();
        self.criteria.retain(|c| !ids.contains(&c.id.as_str()));
        before - self.criteria.len()
    }

    /// Restores the built-in job-offer criteria.
    pub fn reset_to_default(&mut self) {
        self.criteria = JOB_OFFER_CRITERIA.clone();
    }

    /// Suggests the next free id of the form `C{n}`.
    pub fn next_id(&self) -> String {
        let mut n = self.criteria.len() + 1;
        loop {
            let candidate = format!("C{}", n);
            if self.position(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.id == id)
    }
}

impl TryFrom<Vec<Criterion>> for CriteriaCatalog {
    type Error = CatalogError;

    fn try_from(criteria: Vec<Criterion>) -> Result<Self, Self::Error> {
        Self::new(criteria)
    }
}

impl<'de> Deserialize<'de> for CriteriaCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let criteria = Vec::<Criterion>::deserialize(deserializer)?;
        Self::new(criteria).map_err(serde::de::Error::custom)
    }
}
