//! Email service port for notification dispatch.

use crate::task::domain::EmailAddress;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mail dispatch.
pub type MailerResult<T> = Result<T, MailerError>;

/// Outbound notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Sender in `Name <address>` form.
    pub from: String,
    /// Recipient address.
    pub to: EmailAddress,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Email dispatch contract.
///
/// Dispatch is best-effort and at-most-once: implementations must not
/// retry, and callers treat failure as a logged warning rather than an
/// operation failure.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a single notification email.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError`] when the mail service rejects or cannot
    /// accept the message.
    async fn send(&self, message: &EmailMessage) -> MailerResult<()>;
}

/// Errors returned by mailer implementations.
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    /// Mail-service failure.
    #[error("email dispatch failed: {0}")]
    Dispatch(Arc<dyn std::error::Error + Send + Sync>),
}

impl MailerError {
    /// Wraps a dispatch failure.
    pub fn dispatch(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Dispatch(Arc::new(err))
    }
}
