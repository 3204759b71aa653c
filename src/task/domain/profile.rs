//! Read-only assignee profiles used for notification routing.

use super::{EmailAddress, UserId};
use serde::{Deserialize, Serialize};

/// Profile record resolved when routing assignment notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeProfile {
    id: UserId,
    email: EmailAddress,
    full_name: Option<String>,
}

impl AssigneeProfile {
    /// Creates a profile record.
    #[must_use]
    pub const fn new(id: UserId, email: EmailAddress, full_name: Option<String>) -> Self {
        Self {
            id,
            email,
            full_name,
        }
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the profile email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the full name on file, if any.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Returns the name used when addressing the profile owner.
    ///
    /// Falls back to the email address when no name is on file.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(self.email.as_str())
    }
}
