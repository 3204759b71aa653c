//! Raw task submission shape as received on the wire.

use serde::{Deserialize, Serialize};

/// Unvalidated task submission fields.
///
/// Mirrors the JSON body accepted by the creation endpoint: every field
/// arrives as text and optional fields may be absent or `null`. The shared
/// rule set in [`crate::task::validation`] normalizes a draft into a
/// [`crate::task::domain::CreateTaskPayload`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Task title as entered.
    pub title: String,
    /// Optional description as entered.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional explicit notification recipient; an empty string is
    /// treated as absent.
    #[serde(default)]
    pub email: Option<String>,
    /// Priority label; must be one of `low`, `medium`, `high`.
    pub priority: String,
    /// Free-form status label.
    pub status: String,
    /// Owning department identifier.
    pub department_id: String,
    /// Creator account identifier.
    pub created_by: String,
    /// Optional assignee identifier.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Optional due date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub due_date: Option<String>,
}
