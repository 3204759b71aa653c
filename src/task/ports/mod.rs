//! Port contracts for the task-creation workflow.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod directory;
pub mod mailer;
pub mod store;

pub use directory::{DirectoryError, DirectoryResult, ProfileDirectory};
pub use mailer::{EmailMessage, Mailer, MailerError, MailerResult};
pub use store::{StoreError, StoreResult, TaskStore, TicketStore};
