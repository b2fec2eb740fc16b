//! File-based criteria catalog loader.
//!
//! `.yaml`/`.yml` files are read as YAML, everything else as JSON.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::criteria::{CatalogError, CriteriaCatalog};

/// Reads and writes criteria catalogs on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogLoader {
    path: PathBuf,
}

impl FileCatalogLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase)
                .as_deref(),
            Some("yaml") | Some("yml")
        )
    }

    /// Load and validate the catalog.
    ///
    /// # Errors
    /// - `CatalogError::Io` if the file cannot be read
    /// - `CatalogError::Parse` if the document is malformed
    /// - `CatalogError::Validation`/`DuplicateId` if a criterion is invalid
    pub async fn load(&self) -> Result<CriteriaCatalog, CatalogError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", self.path.display(), e)))?;

        let catalog = if self.is_yaml() {
            CriteriaCatalog::from_yaml_str(&content)?
        } else {
            CriteriaCatalog::from_json_str(&content)?
        };

        tracing::debug!(
            path = %self.path.display(),
            criteria = catalog.len(),
            "Loaded criteria catalog"
        );
        Ok(catalog)
    }

    /// Write the catalog, creating parent directories as needed.
    pub async fn save(&self, catalog: &CriteriaCatalog) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| CatalogError::Io(e.to_string()))?;
            }
        }

        let content = if self.is_yaml() {
            serde_yaml::to_string(catalog).map_err(|e| CatalogError::Parse(e.to_string()))?
        } else {
            serde_json::to_string_pretty(catalog).map_err(|e| CatalogError::Parse(e.to_string()))?
        };

        fs::write(&self.path, content)
            .await
            .map_err(|e| CatalogError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::Polarity;
    use tempfile::TempDir;

    const YAML_CATALOG: &str = r#"
- id: C1
  name: Salary
  type: Benefit
  options:
    - label: Low
      value: 1
    - label: High
      value: 5
- id: C2
  name: Commute
  type: Cost
  options:
    - label: Short
      value: 1
"#;

    #[tokio::test]
    async fn loads_yaml_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("criteria.yaml");
        std::fs::write(&path, YAML_CATALOG).unwrap();

        let catalog = FileCatalogLoader::new(&path).load().await.unwrap();

        assert_eq!(catalog.ids(), vec!["C1", "C2"]);
        assert_eq!(catalog.get("C2").unwrap().polarity, Polarity::Cost);
        assert_eq!(catalog.get("C1").unwrap().options.len(), 2);
    }

    #[tokio::test]
    async fn loads_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("criteria.json");
        std::fs::write(
            &path,
            r#"[{"id":"C1","name":"Salary","polarity":"Benefit","options":[{"label":"Low","value":1}]}]"#,
        )
        .unwrap();

        let catalog = FileCatalogLoader::new(&path).load().await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = FileCatalogLoader::new(dir.path().join("nope.yaml")).load().await;
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[tokio::test]
    async fn malformed_document_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("criteria.json");
        std::fs::write(&path, "[{").unwrap();

        let result = FileCatalogLoader::new(&path).load().await;
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("criteria.yml");
        std::fs::write(
            &path,
            "- {id: C1, name: A, type: Benefit, options: [{label: x, value: 1}]}\n\
             - {id: C1, name: B, type: Cost, options: [{label: y, value: 1}]}\n",
        )
        .unwrap();

        let result = FileCatalogLoader::new(&path).load().await;
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId("C1".to_string()));
    }

    #[tokio::test]
    async fn saved_catalog_loads_back() {
        let dir = TempDir::new().unwrap();
        let loader = FileCatalogLoader::new(dir.path().join("out").join("criteria.yaml"));
        let catalog = CriteriaCatalog::job_offers();

        loader.save(&catalog).await.unwrap();
        let restored = loader.load().await.unwrap();

        assert_eq!(restored, catalog);
    }
}
