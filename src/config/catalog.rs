//! Criteria catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::FileCatalogLoader;
use crate::domain::criteria::{CatalogError, CriteriaCatalog};

/// Criteria catalog configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML or JSON criteria file. The built-in job-offer catalog is used
    /// when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" | "json" => Ok(()),
            _ => Err(ValidationError::UnsupportedCatalogFormat(
                path.display().to_string(),
            )),
        }
    }

    /// Load the configured catalog
    pub async fn load(&self) -> Result<CriteriaCatalog, CatalogError> {
        match &self.path {
            Some(path) => FileCatalogLoader::new(path).load().await,
            None => Ok(CriteriaCatalog::job_offers()),
        }
    }
}
