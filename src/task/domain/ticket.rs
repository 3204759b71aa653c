//! Ticket records derived from task assignment.

use super::{DepartmentId, Priority, Task, TicketId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Title prefix applied to every derived ticket.
const ASSIGNMENT_TITLE_PREFIX: &str = "Task Assignment: ";

/// Status every ticket carries at creation.
const OPEN_STATUS: &str = "open";

/// Support ticket created as a side effect of task assignment.
///
/// Tickets are independent entities once created; the creation workflow
/// neither tracks nor reverses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    title: String,
    description: Option<String>,
    priority: Priority,
    status: String,
    department_id: DepartmentId,
    created_by: UserId,
    assigned_to: UserId,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted ticket record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTicketData {
    /// Persisted ticket identifier.
    pub id: TicketId,
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
    /// Persisted assignee account.
    pub assigned_to: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Reconstructs a ticket from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTicketData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            department_id: data.department_id,
            created_by: data.created_by,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
        }
    }

    /// Derives a ticket from an assigned task.
    ///
    /// The title is synthesized as `"Task Assignment: " + task title`;
    /// description, priority, department, and creator are inherited, and
    /// the status is fixed to `"open"`.
    #[must_use]
    pub fn derived_from(task: &Task, assignee: UserId, clock: &impl Clock) -> Self {
        Self {
            id: TicketId::new(),
            title: format!("{ASSIGNMENT_TITLE_PREFIX}{}", task.title()),
            description: task.description().map(str::to_owned),
            priority: task.priority(),
            status: OPEN_STATUS.to_owned(),
            department_id: task.department_id(),
            created_by: task.created_by(),
            assigned_to: assignee,
            created_at: clock.utc(),
        }
    }

    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the ticket title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the inherited description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the inherited priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the ticket status label.
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

    /// Returns the ticket assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> UserId {
        self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
