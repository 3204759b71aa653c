//! In-memory record stores for tests and local use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{DepartmentId, Task, TaskId, Ticket, TicketId, UserId},
    ports::{StoreError, StoreResult, TaskStore, TicketStore},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<TaskState>>,
}

#[derive(Debug, Default)]
struct TaskState {
    tasks: HashMap<TaskId, Task>,
    fail_inserts: bool,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory task store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent inserts fail with a persistence error, simulating
    /// store unavailability.
    pub fn fail_inserts(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_inserts = fail;
        }
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn len(&self) -> StoreResult<usize> {
        let state = read_lock(&self.state)?;
        Ok(state.tasks.len())
    }

    /// Returns whether the store holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Thread-safe in-memory ticket store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketStore {
    state: Arc<RwLock<TicketState>>,
}

#[derive(Debug, Default)]
struct TicketState {
    tickets: HashMap<TicketId, Ticket>,
    fail_inserts: bool,
}

impl InMemoryTicketStore {
    /// Creates an empty in-memory ticket store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent inserts fail with a persistence error, simulating
    /// store unavailability.
    pub fn fail_inserts(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_inserts = fail;
        }
    }
}

/// Acquires a read lock, mapping poisoning into a persistence error.
fn read_lock<T>(lock: &RwLock<T>) -> StoreResult<std::sync::RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
}

/// Acquires a write lock, mapping poisoning into a persistence error.
fn write_lock<T>(lock: &RwLock<T>) -> StoreResult<std::sync::RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
}

/// Error raised when failure injection is armed.
fn injected_failure() -> StoreError {
    StoreError::persistence(std::io::Error::other("injected store failure"))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        if state.fail_inserts {
            return Err(injected_failure());
        }
        if state.tasks.contains_key(&task.id()) {
            return Err(StoreError::Duplicate(task.id().into_inner()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let state = read_lock(&self.state)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_department(&self, department: DepartmentId) -> StoreResult<Vec<Task>> {
        let state = read_lock(&self.state)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.department_id() == department)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn insert(&self, ticket: &Ticket) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        if state.fail_inserts {
            return Err(injected_failure());
        }
        if state.tickets.contains_key(&ticket.id()) {
            return Err(StoreError::Duplicate(ticket.id().into_inner()));
        }
        state.tickets.insert(ticket.id(), ticket.clone());
        Ok(())
    }

    async fn list_by_assignee(&self, assignee: UserId) -> StoreResult<Vec<Ticket>> {
        let state = read_lock(&self.state)?;
        Ok(state
            .tickets
            .values()
            .filter(|ticket| ticket.assigned_to() == assignee)
            .cloned()
            .collect())
    }
}
