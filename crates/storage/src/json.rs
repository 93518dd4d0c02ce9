//! JSON catalog files.
//!
//! ```json
//! {
//!   "categories": [
//!     {
//!       "id": "greetings",
//!       "name": "Greetings",
//!       "sentences": [{ "source": "안녕하세요", "target": "Hello" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Sentence fields may also be spelled `korean` / `english`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use drill_core::model::{Catalog, Category};
use serde::{Deserialize, Serialize};

use crate::repository::{CatalogRepository, StorageError};

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
}

/// Parse and validate a catalog from JSON text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::Catalog` if the categories fail validation.
pub fn parse_catalog(raw: &str) -> Result<Catalog, StorageError> {
    let document: CatalogDocument =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    Ok(Catalog::new(document.categories)?)
}

/// Render a catalog as pretty JSON in the same layout `parse_catalog` reads.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn to_json(catalog: &Catalog) -> Result<String, StorageError> {
    let document = CatalogDocument {
        categories: catalog.categories().to_vec(),
    };
    serde_json::to_string_pretty(&document).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Reads the catalog from a JSON file on every `load_catalog` call.
#[derive(Debug, Clone)]
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
                _ => StorageError::Io(e.to_string()),
            })?;
        let catalog = parse_catalog(&raw)?;
        log::debug!(
            "loaded {} categories ({} sentences) from {}",
            catalog.categories().len(),
            catalog.total_sentences(),
            self.path.display()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::{CatalogError, CategoryId};

    #[test]
    fn parses_source_target_and_legacy_field_names() {
        let raw = r#"{
            "categories": [
                {
                    "id": "greetings",
                    "name": "Greetings",
                    "sentences": [
                        { "source": "안녕하세요", "target": "Hello" },
                        { "korean": "감사합니다", "english": "Thank you" }
                    ]
                }
            ]
        }"#;

        let catalog = parse_catalog(raw).unwrap();
        let category = catalog.category(&CategoryId::new("greetings")).unwrap();
        assert_eq!(category.display_name(), "Greetings");
        assert_eq!(category.sentences()[1].source_text(), "감사합니다");
        assert_eq!(category.sentences()[1].target_text(), "Thank you");
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = parse_catalog("{ \"categories\": [").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn invalid_catalog_is_rejected() {
        let raw = r#"{ "categories": [ { "id": "all", "name": "All", "sentences": [] } ] }"#;
        let err = parse_catalog(raw).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Catalog(CatalogError::ReservedCategoryId(_))
        ));
    }

    #[test]
    fn written_json_parses_back() {
        let catalog = crate::builtin::builtin_catalog();
        let raw = to_json(&catalog).unwrap();
        assert_eq!(parse_catalog(&raw).unwrap(), catalog);
    }
}
