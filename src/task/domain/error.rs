//! Error types for task domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The email address does not follow a standard address grammar.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The email address exceeds the supported length.
    #[error("email address of {actual} characters exceeds the {max} character limit")]
    EmailTooLong {
        /// Maximum supported length.
        max: usize,
        /// Actual length of the rejected value.
        actual: usize,
    },
}

/// Error returned while parsing priorities from persistence or wire input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
