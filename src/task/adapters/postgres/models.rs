//! Diesel row models for task workflow persistence.

use super::schema::{profiles, tasks, tickets};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority label.
    pub priority: String,
    /// Free-form status label.
    pub status: String,
    /// Owning department.
    pub department_id: uuid::Uuid,
    /// Creator account.
    pub created_by: uuid::Uuid,
    /// Optional assignee account.
    pub assigned_to: Option<uuid::Uuid>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional explicit notification recipient.
    pub notify_email: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority label.
    pub priority: String,
    /// Free-form status label.
    pub status: String,
    /// Owning department.
    pub department_id: uuid::Uuid,
    /// Creator account.
    pub created_by: uuid::Uuid,
    /// Optional assignee account.
    pub assigned_to: Option<uuid::Uuid>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional explicit notification recipient.
    pub notify_email: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for ticket records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TicketRow {
    /// Ticket identifier.
    pub id: uuid::Uuid,
    /// Synthesized ticket title.
    pub title: String,
    /// Inherited description.
    pub description: Option<String>,
    /// Inherited priority label.
    pub priority: String,
    /// Ticket status label.
    pub status: String,
    /// Owning department.
    pub department_id: uuid::Uuid,
    /// Creator account.
    pub created_by: uuid::Uuid,
    /// Assignee account.
    pub assigned_to: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for ticket records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tickets)]
pub struct NewTicketRow {
    /// Ticket identifier.
    pub id: uuid::Uuid,
    /// Synthesized ticket title.
    pub title: String,
    /// Inherited description.
    pub description: Option<String>,
    /// Inherited priority label.
    pub priority: String,
    /// Ticket status label.
    pub status: String,
    /// Owning department.
    pub department_id: uuid::Uuid,
    /// Creator account.
    pub created_by: uuid::Uuid,
    /// Assignee account.
    pub assigned_to: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for profile records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Contact email address.
    pub email: String,
    /// Optional display name.
    pub full_name: Option<String>,
}
