use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use drill_core::model::{Catalog, CatalogError, CategoryId};
use thiserror::Error;

/// Errors surfaced by catalog sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("catalog not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Menu entry for a category: what to show and how many sentences it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub display_name: String,
    pub sentence_count: usize,
}

impl CategorySummary {
    /// Lists every category of `catalog` in catalog order.
    #[must_use]
    pub fn list(catalog: &Catalog) -> Vec<Self> {
        catalog
            .categories()
            .iter()
            .map(|c| Self {
                id: c.id().clone(),
                display_name: c.display_name().to_owned(),
                sentence_count: c.len(),
            })
            .collect()
    }

    /// Menu label such as `Meetings (12)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.sentence_count)
    }
}

/// Source of the sentence catalog. Loaded once before any session starts.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read or is invalid.
    async fn load_catalog(&self) -> Result<Catalog, StorageError>;
}

/// Catalog held in memory, for tests and the built-in sample data.
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    catalog: Arc<Catalog>,
}

impl InMemoryCatalogRepository {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        Ok(self.catalog.as_ref().clone())
    }
}
