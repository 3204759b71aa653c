//! Field-level validation errors for task submissions.

use thiserror::Error;

/// Errors produced while validating a task submission.
///
/// Each variant names the offending field so callers can report errors
/// field-specifically. [`ValidationError::Multiple`] aggregates every
/// failure found in a draft; callers that surface one error at a time can
/// take [`ValidationError::first`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after normalization.
    #[error("{field} is required")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A field exceeds its maximum length.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
        /// Actual length of the rejected value.
        actual: usize,
    },

    /// A field is outside its closed set of allowed values.
    #[error("{field} must be one of {allowed:?}, got '{value}'")]
    InvalidEnum {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted values.
        allowed: &'static [&'static str],
    },

    /// A field does not follow its required grammar.
    #[error("{field} is invalid: {reason}")]
    InvalidFormat {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the grammar violation.
        reason: String,
    },

    /// A field is not a syntactically valid unique identifier.
    #[error("{field} is not a valid identifier: '{value}'")]
    InvalidId {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: String,
    },

    /// Several fields failed validation.
    #[error("validation failed: {}", first_message(.0))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Wraps a collection of errors, unwrapping singletons.
    #[must_use]
    pub fn multiple(mut errors: Vec<Self>) -> Self {
        if errors.len() == 1 {
            errors.pop().map_or(Self::Multiple(Vec::new()), |error| error)
        } else {
            Self::Multiple(errors)
        }
    }

    /// Returns the first field-level error.
    #[must_use]
    pub fn first(&self) -> &Self {
        match self {
            Self::Multiple(errors) => errors.first().unwrap_or(self),
            _ => self,
        }
    }
}

/// Renders the first aggregated error for `Display` purposes.
fn first_message(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map_or_else(|| "no errors recorded".to_owned(), ToString::to_string)
}
