use thiserror::Error;

use crate::model::{CategoryId, Scope};

/// Errors raised while turning a scope into a playable set of sentences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScopeError {
    #[error("scope `{0}` has no sentences")]
    EmptyScope(Scope),

    #[error("unknown category: {0}")]
    InvalidScope(CategoryId),
}
