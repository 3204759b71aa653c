//! Task aggregate root and its creation payload.

use super::{DepartmentId, EmailAddress, Priority, TaskId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Normalized, fully validated payload for creating a task.
///
/// Produced by [`crate::task::validation::validate_draft`]; every field has
/// already passed the shared rule set, so construction from this payload
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskPayload {
    /// Trimmed task title.
    pub title: String,
    /// Trimmed optional description.
    pub description: Option<String>,
    /// Task priority.
    pub priority: Priority,
    /// Free-form non-empty status label.
    pub status: String,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Account that created the task.
    pub created_by: UserId,
    /// Optional assignee.
    pub assigned_to: Option<UserId>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional explicit notification recipient.
    pub override_email: Option<EmailAddress>,
}

/// Task aggregate root.
///
/// Tasks are created by the orchestration workflow and never mutated by it;
/// updates and deletion are external administrative actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    priority: Priority,
    status: String,
    department_id: DepartmentId,
    created_by: UserId,
    assigned_to: Option<UserId>,
    due_date: Option<NaiveDate>,
    override_email: Option<EmailAddress>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted status label.
    pub status: String,
    /// Persisted owning department.
    pub department_id: DepartmentId,
    /// Persisted creator account.
    pub created_by: UserId,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted notification override address, if any.
    pub override_email: Option<EmailAddress>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a validated payload.
    #[must_use]
    pub fn new(payload: CreateTaskPayload, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: payload.title,
            description: payload.description,
            priority: payload.priority,
            status: payload.status,
            department_id: payload.department_id,
            created_by: payload.created_by,
            assigned_to: payload.assigned_to,
            due_date: payload.due_date,
            override_email: payload.override_email,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            department_id: data.department_id,
            created_by: data.created_by,
            assigned_to: data.assigned_to,
            due_date: data.due_date,
            override_email: data.override_email,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the free-form status label.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the owning department.
    #[must_use]
    pub const fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    /// Returns the creator account.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the explicit notification recipient, if any.
    #[must_use]
    pub const fn override_email(&self) -> Option<&EmailAddress> {
        self.override_email.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
