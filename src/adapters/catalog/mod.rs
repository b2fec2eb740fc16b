//! Criteria catalog adapters.

mod file_loader;

pub use file_loader::FileCatalogLoader;
