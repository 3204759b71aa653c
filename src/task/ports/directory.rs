//! Profile directory port for assignee lookup.

use crate::task::domain::{AssigneeProfile, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Read-only lookup of assignee profiles.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Resolves a profile by account identifier.
    ///
    /// Returns `None` when no profile exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the lookup itself fails.
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<AssigneeProfile>>;
}

/// Errors returned by profile directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Directory-layer failure.
    #[error("profile lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a lookup failure.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
