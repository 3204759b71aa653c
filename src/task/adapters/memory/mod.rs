//! In-memory adapter implementations of the task ports.
//!
//! These back the test suites and local development; each supports
//! failure injection so best-effort workflow branches can be exercised
//! deterministically.

mod directory;
mod mailer;
mod store;

pub use directory::InMemoryProfileDirectory;
pub use mailer::RecordingMailer;
pub use store::{InMemoryTaskStore, InMemoryTicketStore};
