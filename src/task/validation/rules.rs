//! Individual validation rule implementations.
//!
//! Each rule is a pure function validating one field of a task draft.
//! Rules are order-independent; [`super::validate_draft`] applies them all
//! and aggregates the failures.

use super::error::ValidationError;
use crate::task::domain::{EmailAddress, Priority, TaskDomainError};
use chrono::NaiveDate;
use uuid::Uuid;

/// Maximum accepted title length.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum accepted description length.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Validates and normalizes the task title.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] when the title is empty after
/// trimming, or [`ValidationError::TooLong`] when it exceeds 200
/// characters.
pub fn validate_title(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field: "title" });
    }
    let length = trimmed.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "title",
            max: MAX_TITLE_LENGTH,
            actual: length,
        });
    }
    Ok(trimmed.to_owned())
}

/// Validates and normalizes the optional description.
///
/// # Errors
///
/// Returns [`ValidationError::TooLong`] when a present description exceeds
/// 2000 characters.
pub fn validate_description(value: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "description",
            max: MAX_DESCRIPTION_LENGTH,
            actual: length,
        });
    }
    Ok(Some(trimmed.to_owned()))
}

/// Validates the optional override email; an empty string is absent.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFormat`] when a present value does
/// not parse as an email address or exceeds 255 characters.
pub fn validate_email(value: Option<&str>) -> Result<Option<EmailAddress>, ValidationError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match EmailAddress::new(raw) {
        Ok(address) => Ok(Some(address)),
        Err(TaskDomainError::EmailTooLong { max, actual }) => Err(ValidationError::TooLong {
            field: "email",
            max,
            actual,
        }),
        Err(err) => Err(ValidationError::InvalidFormat {
            field: "email",
            reason: err.to_string(),
        }),
    }
}

/// Validates the priority label against the closed set.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEnum`] for anything outside
/// `{low, medium, high}`.
pub fn validate_priority(value: &str) -> Result<Priority, ValidationError> {
    Priority::try_from(value).map_err(|_| ValidationError::InvalidEnum {
        field: "priority",
        value: value.to_owned(),
        allowed: Priority::ALLOWED,
    })
}

/// Validates the free-form status label.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] when the status is empty.
pub fn validate_status(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field: "status" });
    }
    Ok(value.to_owned())
}

/// Validates a required UUID-shaped identifier field.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidId`] when the value does not parse
/// as a UUID.
pub fn validate_id(field: &'static str, value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| ValidationError::InvalidId {
        field,
        value: value.to_owned(),
    })
}

/// Validates the optional assignee identifier.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidId`] when a present value does not
/// parse as a UUID.
pub fn validate_optional_id(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Uuid>, ValidationError> {
    value.map(|raw| validate_id(field, raw)).transpose()
}

/// Validates the optional due date; an empty string is absent.
///
/// No range check is applied.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFormat`] when a present value does
/// not parse as a `YYYY-MM-DD` calendar date.
pub fn validate_due_date(value: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|err| ValidationError::InvalidFormat {
            field: "due_date",
            reason: err.to_string(),
        })
}
