//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::ScopeError;

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Scope(#[from] ScopeError),
}
