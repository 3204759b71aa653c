//! Record store ports for task and ticket persistence.

use crate::task::domain::{DepartmentId, Task, TaskId, Ticket, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] when the identifier already
    /// exists, [`StoreError::ForeignKey`] when a referenced department or
    /// account is missing, or [`StoreError::Persistence`] when the store
    /// is unavailable.
    async fn insert(&self, task: &Task) -> StoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>>;

    /// Returns all tasks owned by the given department.
    async fn list_by_department(&self, department: DepartmentId) -> StoreResult<Vec<Task>>;
}

/// Ticket persistence contract.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Stores a new ticket record.
    ///
    /// # Errors
    ///
    /// Returns the same error taxonomy as [`TaskStore::insert`].
    async fn insert(&self, ticket: &Ticket) -> StoreResult<()>;

    /// Returns all tickets assigned to the given account.
    async fn list_by_assignee(&self, assignee: UserId) -> StoreResult<Vec<Ticket>>;
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A record with the same identifier already exists.
    #[error("duplicate record identifier: {0}")]
    Duplicate(Uuid),

    /// A referenced record does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),

    /// Store-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
