//! Intake checks applied before alternatives are handed to the engine.
//!
//! The engine itself accepts partial input (absent scores become zero);
//! these checks enforce the stricter completeness rules of an evaluation
//! request.

use std::collections::HashSet;

use super::Alternative;
use crate::domain::criteria::CriteriaCatalog;
use crate::domain::foundation::ValidationError;

pub struct IntakeValidator;

impl IntakeValidator {
    /// Rejects the first alternative that is unnamed, duplicated, or unscored.
    pub fn check(
        alternatives: &[Alternative],
        catalog: &CriteriaCatalog,
    ) -> Result<(), ValidationError> {
        if catalog.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        if alternatives.is_empty() {
            return Err(ValidationError::empty_field("alternatives"));
        }

        let mut seen = HashSet::new();
        for (index, alternative) in alternatives.iter().enumerate() {
            if alternative.name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "alternatives[{}].name",
                    index
                )));
            }
            if !seen.insert(alternative.id.as_str()) {
                return Err(ValidationError::duplicate(
                    "alternatives.id",
                    alternative.id.clone(),
                ));
            }
            let missing = alternative.missing_criteria(catalog);
            if !missing.is_empty() {
                return Err(ValidationError::invalid_format(
                    alternative.name.clone(),
                    format!("missing scores for {}", missing.join(", ")),
                ));
            }
        }

        Ok(())
    }
}
