//! Shared validation for task submissions.
//!
//! This module is the single rule definition: every entry point,
//! client-facing or server-side, normalizes a [`TaskDraft`] through
//! [`validate_draft`], so the schemas on either side of the wire cannot
//! drift apart.

mod draft;
mod error;
pub mod rules;

pub use draft::TaskDraft;
pub use error::ValidationError;

use crate::task::domain::{CreateTaskPayload, DepartmentId, UserId};

/// Collects a rule result, recording any failure.
fn collect<T>(result: Result<T, ValidationError>, errors: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

/// Validates a raw draft into a normalized creation payload.
///
/// Validation is pure, synchronous, and order-independent across fields.
/// All field failures are collected; single failures are returned
/// unwrapped, several as [`ValidationError::Multiple`].
///
/// # Errors
///
/// Returns a [`ValidationError`] describing every field that failed.
pub fn validate_draft(draft: &TaskDraft) -> Result<CreateTaskPayload, ValidationError> {
    let mut errors = Vec::new();

    let fields = (
        collect(rules::validate_title(&draft.title), &mut errors),
        collect(
            rules::validate_description(draft.description.as_deref()),
            &mut errors,
        ),
        collect(rules::validate_email(draft.email.as_deref()), &mut errors),
        collect(rules::validate_priority(&draft.priority), &mut errors),
        collect(rules::validate_status(&draft.status), &mut errors),
        collect(
            rules::validate_id("department_id", &draft.department_id),
            &mut errors,
        ),
        collect(
            rules::validate_id("created_by", &draft.created_by),
            &mut errors,
        ),
        collect(
            rules::validate_optional_id("assigned_to", draft.assigned_to.as_deref()),
            &mut errors,
        ),
        collect(
            rules::validate_due_date(draft.due_date.as_deref()),
            &mut errors,
        ),
    );

    if let (
        Some(title),
        Some(description),
        Some(override_email),
        Some(priority),
        Some(status),
        Some(department_id),
        Some(created_by),
        Some(assigned_to),
        Some(due_date),
    ) = fields
    {
        Ok(CreateTaskPayload {
            title,
            description,
            priority,
            status,
            department_id: DepartmentId::from_uuid(department_id),
            created_by: UserId::from_uuid(created_by),
            assigned_to: assigned_to.map(UserId::from_uuid),
            due_date,
            override_email,
        })
    } else {
        Err(ValidationError::multiple(errors))
    }
}
