#![forbid(unsafe_code)]

pub mod builtin;
pub mod json;
pub mod repository;

pub use builtin::builtin_catalog;
pub use json::JsonCatalogRepository;
pub use repository::{CatalogRepository, CategorySummary, InMemoryCatalogRepository, StorageError};
