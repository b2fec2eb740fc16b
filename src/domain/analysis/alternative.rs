//! Alternative - one option being ranked, with its raw per-criterion scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::criteria::CriteriaCatalog;

/// An alternative with raw scores keyed by criterion id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "values")]
    pub scores: BTreeMap<String, f64>,
}

impl Alternative {
    /// Creates an alternative with no scores.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Sets the raw score for a criterion.
    pub fn with_score(mut self, criterion_id: impl Into<String>, value: f64) -> Self {
        self.scores.insert(criterion_id.into(), value);
        self
    }

    /// Returns the raw score for a criterion, if one was entered.
    pub fn score(&self, criterion_id: &str) -> Option<f64> {
        self.scores.get(criterion_id).copied()
    }

    /// Ids of catalog criteria this alternative has no score for, in catalog order.
    pub fn missing_criteria<'a>(&self, catalog: &'a CriteriaCatalog) -> Vec<&'a str> {
        catalog
            .criteria()
            .iter()
            .filter(|c| !self.scores.contains_key(&c.id))
            .map(|c| c.id.as_str())
            .collect()
    }

    /// Complete when named and scored on every active criterion.
    pub fn is_complete(&self, catalog: &CriteriaCatalog) -> bool {
        !self.name.trim().is_empty() && self.missing_criteria(catalog).is_empty()
    }

    /// Ids of criteria whose score is not one of the criterion's option values.
    pub fn out_of_domain<'a>(&self, catalog: &'a CriteriaCatalog) -> Vec<&'a str> {
        catalog
            .criteria()
            .iter()
            .filter(|c| matches!(self.score(&c.id), Some(v) if !c.accepts(v)))
            .map(|c| c.id.as_str())
            .collect()
    }
}
