//! Validated email address scalar for notification routing.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized email address used for notification routing.
///
/// Validation follows the standard `local@domain` grammar accepted by the
/// record store: a non-empty local part, exactly one `@`, a dotted domain,
/// and no whitespace anywhere in the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Largest address length accepted by the mail service.
    const MAX_LENGTH: usize = 255;

    /// Creates a validated email address.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidEmail`] when the value does not
    /// follow the address grammar, or [`TaskDomainError::EmailTooLong`]
    /// when it exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let char_count = normalized.chars().count();
        if char_count > Self::MAX_LENGTH {
            return Err(TaskDomainError::EmailTooLong {
                max: Self::MAX_LENGTH,
                actual: char_count,
            });
        }

        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let domain_is_dotted = domain.split('.').count() >= 2
            && domain.split('.').all(|label| !label.is_empty());
        let is_valid = !local.is_empty()
            && !has_more_segments
            && domain_is_dotted
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(TaskDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
