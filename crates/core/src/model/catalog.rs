use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ScopeError;
use crate::model::ids::CategoryId;
use crate::model::sentence::SentencePair;

/// Text that selects every category instead of a single one.
pub const ALL_SCOPE: &str = "all";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("category id cannot be empty")]
    EmptyCategoryId,

    #[error("category id `{0}` is reserved")]
    ReservedCategoryId(CategoryId),

    #[error("duplicate category id: {0}")]
    DuplicateCategory(CategoryId),

    #[error("category `{0}` has no display name")]
    EmptyDisplayName(CategoryId),
}

//
// ─── SCOPE ─────────────────────────────────────────────────────────────────────
//

/// Which sentences populate a session: one category or all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    All,
    Category(CategoryId),
}

impl Scope {
    /// Interprets `all` (any case) as every category, anything else as a category id.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(ALL_SCOPE) {
            Self::All
        } else {
            Self::Category(CategoryId::new(trimmed))
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str(ALL_SCOPE),
            Scope::Category(id) => write!(f, "{id}"),
        }
    }
}

impl From<CategoryId> for Scope {
    fn from(id: CategoryId) -> Self {
        Self::Category(id)
    }
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// A named group of sentence pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    #[serde(rename = "name")]
    display_name: String,
    sentences: Vec<SentencePair>,
}

impl Category {
    #[must_use]
    pub fn new(
        id: CategoryId,
        display_name: impl Into<String>,
        sentences: Vec<SentencePair>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            sentences,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn sentences(&self) -> &[SentencePair] {
        &self.sentences
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Read-only collection of categories, kept in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog, checking that category ids are usable as scopes.
    ///
    /// Categories without sentences are accepted here; selecting one is
    /// reported when a session starts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for blank, reserved or duplicate ids and blank names.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            let id = category.id();
            if id.is_blank() {
                return Err(CatalogError::EmptyCategoryId);
            }
            if id.as_str().eq_ignore_ascii_case(ALL_SCOPE) {
                return Err(CatalogError::ReservedCategoryId(id.clone()));
            }
            if category.display_name().trim().is_empty() {
                return Err(CatalogError::EmptyDisplayName(id.clone()));
            }
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateCategory(id.clone()));
            }
        }
        Ok(Self { categories })
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Total number of sentence pairs across all categories.
    #[must_use]
    pub fn total_sentences(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Collects the sentence pairs selected by `scope`, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidScope` for unknown categories and
    /// `ScopeError::EmptyScope` when the selection has no sentences.
    pub fn resolve(&self, scope: &Scope) -> Result<Vec<SentencePair>, ScopeError> {
        let pairs: Vec<SentencePair> = match scope {
            Scope::All => self
                .categories
                .iter()
                .flat_map(|c| c.sentences().iter().cloned())
                .collect(),
            Scope::Category(id) => self
                .category(id)
                .ok_or_else(|| ScopeError::InvalidScope(id.clone()))?
                .sentences()
                .to_vec(),
        };

        if pairs.is_empty() {
            return Err(ScopeError::EmptyScope(scope.clone()));
        }
        Ok(pairs)
    }
}
