//! Task-creation orchestration with best-effort notification side effects.

use crate::task::{
    domain::{EmailAddress, Task, Ticket, UserId},
    ports::{EmailMessage, Mailer, ProfileDirectory, StoreError, TaskStore, TicketStore},
    services::email,
    validation::{self, TaskDraft, ValidationError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Default sender used for assignment notifications.
const DEFAULT_SENDER: &str = "Tasks <onboarding@resend.dev>";

/// Initial display name used before an assignee profile is resolved.
const DEFAULT_RECIPIENT_NAME: &str = "User";

/// Top-level errors for the creation workflow.
///
/// Only input validation and task persistence can fail the operation;
/// everything after the task record is written is best-effort and
/// reported through [`NotificationWarning`] instead.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// Input validation failed; no side effects were performed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The task record could not be persisted.
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

/// Result type for creation workflow operations.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Best-effort step failure recorded on a successful outcome.
///
/// These never abort the operation and are never surfaced as top-level
/// errors; a failed notification email is simply lost.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationWarning {
    /// The assignee profile could not be resolved.
    #[error("assignee {assignee} could not be resolved: {reason}")]
    AssigneeLookupFailed {
        /// Assignee whose lookup failed.
        assignee: UserId,
        /// Description of the lookup failure.
        reason: String,
    },

    /// The derived ticket could not be stored.
    #[error("ticket creation for assignee {assignee} failed: {reason}")]
    TicketCreationFailed {
        /// Assignee the ticket was derived for.
        assignee: UserId,
        /// Description of the store failure.
        reason: String,
    },

    /// The notification email could not be dispatched.
    #[error("email dispatch to {recipient} failed: {reason}")]
    EmailDispatchFailed {
        /// Intended recipient.
        recipient: EmailAddress,
        /// Description of the dispatch failure.
        reason: String,
    },
}

/// Successful outcome of the creation workflow.
///
/// Separates the primary effect (the persisted task) from secondary
/// best-effort failures so callers and tests can assert on both
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreationOutcome {
    task: Task,
    warnings: Vec<NotificationWarning>,
}

impl TaskCreationOutcome {
    /// Returns the persisted task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the best-effort failures recorded during the workflow.
    #[must_use]
    pub fn warnings(&self) -> &[NotificationWarning] {
        &self.warnings
    }

    /// Consumes the outcome, returning the persisted task.
    #[must_use]
    pub fn into_task(self) -> Task {
        self.task
    }
}

/// Resolved notification routing state.
struct Routing {
    recipient: Option<EmailAddress>,
    recipient_name: String,
}

/// Task-creation orchestration service.
///
/// Sequences task persistence with its notification side effects: after
/// the task record is written, assignee lookup, ticket creation, and
/// email dispatch each run at most once with no retry, and their failures
/// are logged and recorded as warnings rather than propagated.
#[derive(Clone)]
pub struct TaskCreationService<TS, XS, D, M, C>
where
    TS: TaskStore,
    XS: TicketStore,
    D: ProfileDirectory,
    M: Mailer,
    C: Clock + Send + Sync,
{
    tasks: Arc<TS>,
    tickets: Arc<XS>,
    directory: Arc<D>,
    mailer: Arc<M>,
    clock: Arc<C>,
    sender: String,
}

impl<TS, XS, D, M, C> TaskCreationService<TS, XS, D, M, C>
where
    TS: TaskStore,
    XS: TicketStore,
    D: ProfileDirectory,
    M: Mailer,
    C: Clock + Send + Sync,
{
    /// Creates a new creation service with the default sender address.
    #[must_use]
    pub fn new(
        tasks: Arc<TS>,
        tickets: Arc<XS>,
        directory: Arc<D>,
        mailer: Arc<M>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            tickets,
            directory,
            mailer,
            clock,
            sender: DEFAULT_SENDER.to_owned(),
        }
    }

    /// Overrides the notification sender address.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Creates a task and performs its best-effort notification side
    /// effects.
    ///
    /// The draft is validated with the shared rule set regardless of any
    /// validation the caller already performed. Task persistence is the
    /// only required success condition: once the record is written, the
    /// operation succeeds even when assignee lookup, ticket creation, or
    /// email dispatch subsequently fail.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Validation`] when the draft is
    /// rejected (no side effects performed) or
    /// [`TaskCreationError::Persistence`] when the task record cannot be
    /// written (no further steps run).
    pub async fn create_task_with_notification(
        &self,
        draft: &TaskDraft,
    ) -> TaskCreationResult<TaskCreationOutcome> {
        let payload = validation::validate_draft(draft)?;
        let task = Task::new(payload, &*self.clock);

        self.tasks.insert(&task).await?;
        info!(task_id = %task.id(), department_id = %task.department_id(), "task created");

        let mut warnings = Vec::new();
        let mut routing = Routing {
            recipient: task.override_email().cloned(),
            recipient_name: DEFAULT_RECIPIENT_NAME.to_owned(),
        };

        if let Some(assignee) = task.assigned_to() {
            self.notify_assignee(&task, assignee, &mut routing, &mut warnings)
                .await;
        }

        if let Some(recipient) = routing.recipient {
            self.dispatch_email(&task, recipient, &routing.recipient_name, &mut warnings)
                .await;
        }

        Ok(TaskCreationOutcome { task, warnings })
    }

    /// Resolves the assignee profile and creates the derived ticket.
    ///
    /// A failed lookup leaves the routing untouched and skips the ticket;
    /// a failed ticket insert never blocks email dispatch.
    async fn notify_assignee(
        &self,
        task: &Task,
        assignee: UserId,
        routing: &mut Routing,
        warnings: &mut Vec<NotificationWarning>,
    ) {
        let profile = match self.directory.find_by_id(assignee).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                warn!(%assignee, "assignee profile not found");
                warnings.push(NotificationWarning::AssigneeLookupFailed {
                    assignee,
                    reason: "profile not found".to_owned(),
                });
                return;
            }
            Err(err) => {
                warn!(%assignee, error = %err, "assignee lookup failed");
                warnings.push(NotificationWarning::AssigneeLookupFailed {
                    assignee,
                    reason: err.to_string(),
                });
                return;
            }
        };

        if routing.recipient.is_none() {
            routing.recipient = Some(profile.email().clone());
        }
        routing.recipient_name = profile.display_name().to_owned();

        let ticket = Ticket::derived_from(task, assignee, &*self.clock);
        if let Err(err) = self.tickets.insert(&ticket).await {
            warn!(%assignee, error = %err, "ticket creation failed");
            warnings.push(NotificationWarning::TicketCreationFailed {
                assignee,
                reason: err.to_string(),
            });
        } else {
            info!(ticket_id = %ticket.id(), %assignee, "assignment ticket created");
        }
    }

    /// Renders and dispatches the notification email.
    async fn dispatch_email(
        &self,
        task: &Task,
        recipient: EmailAddress,
        recipient_name: &str,
        warnings: &mut Vec<NotificationWarning>,
    ) {
        let html = match email::render_notification(task, recipient_name) {
            Ok(html) => html,
            Err(err) => {
                warn!(%recipient, error = %err, "notification rendering failed");
                warnings.push(NotificationWarning::EmailDispatchFailed {
                    recipient,
                    reason: err.to_string(),
                });
                return;
            }
        };

        let message = EmailMessage {
            from: self.sender.clone(),
            to: recipient.clone(),
            subject: email::notification_subject(task),
            html,
        };

        if let Err(err) = self.mailer.send(&message).await {
            warn!(%recipient, error = %err, "email dispatch failed");
            warnings.push(NotificationWarning::EmailDispatchFailed {
                recipient,
                reason: err.to_string(),
            });
        } else {
            info!(%recipient, "notification email sent");
        }
    }
}
