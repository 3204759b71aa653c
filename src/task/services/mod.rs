//! Orchestration services for the task-creation workflow.

pub mod creation;
pub mod email;

pub use creation::{
    NotificationWarning, TaskCreationError, TaskCreationOutcome, TaskCreationResult,
    TaskCreationService,
};
pub use email::{NotificationRenderError, notification_subject, render_notification};
