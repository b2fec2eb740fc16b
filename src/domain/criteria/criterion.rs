//! Criterion - a weighted dimension alternatives are scored on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Higher raw values are preferred.
    Benefit,
    /// Lower raw values are preferred.
    Cost,
}

impl Polarity {
    /// Returns the display label for this polarity.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "Benefit",
            Polarity::Cost => "Cost",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One legal (label, score) choice for a criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionOption {
    pub label: String,
    pub value: f64,
}

impl CriterionOption {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A criterion with its polarity and discrete option domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    #[serde(alias = "type")]
    pub polarity: Polarity,
    pub options: Vec<CriterionOption>,
}

impl Criterion {
    /// Creates a criterion with no options yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            polarity,
            options: Vec::new(),
        }
    }

    /// Appends an option.
    pub fn with_option(mut self, label: impl Into<String>, value: f64) -> Self {
        self.options.push(CriterionOption::new(label, value));
        self
    }

    /// Replaces the option list.
    pub fn with_options(mut self, options: Vec<CriterionOption>) -> Self {
        self.options = options;
        self
    }

    /// Checks the structural invariants of a criterion.
    ///
    /// Id and name must be non-blank, there must be at least one option,
    /// every option needs a label and a finite value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion.id"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion.name"));
        }
        if self.options.is_empty() {
            return Err(ValidationError::empty_field(format!("{}.options", self.id)));
        }
        for (index, option) in self.options.iter().enumerate() {
            if option.label.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "{}.options[{}].label",
                    self.id, index
                )));
            }
            if !option.value.is_finite() {
                return Err(ValidationError::invalid_format(
                    format!("{}.options[{}].value", self.id, index),
                    "option value must be a finite number",
                ));
            }
        }
        Ok(())
    }

    /// Returns true if the raw value is one of this criterion's option values.
    pub fn accepts(&self, value: f64) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Returns the label of the option with the given value.
    pub fn option_for(&self, value: f64) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    pub fn is_cost(&self) -> bool {
        self.polarity == Polarity::Cost
    }
}
