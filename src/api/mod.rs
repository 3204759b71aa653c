//! Request/response facade over the task-creation workflow.
//!
//! Mirrors the single-operation HTTP surface the workflow is deployed
//! behind without binding to any particular server framework: JSON in,
//! status code and JSON out.

use mockable::Clock;
use serde_json::{Value, json};
use tracing::error;

use crate::task::{
    ports::{Mailer, ProfileDirectory, TaskStore, TicketStore},
    services::TaskCreationService,
    validation::TaskDraft,
};

/// HTTP status for a successful invocation.
const STATUS_OK: u16 = 200;

/// HTTP status for any failed invocation.
const STATUS_INTERNAL_ERROR: u16 = 500;

/// HTTP-style response returned by the facade.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    body: Option<Value>,
}

impl ApiResponse {
    /// Returns the HTTP-style status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    const fn ok(body: Value) -> Self {
        Self {
            status: STATUS_OK,
            body: Some(body),
        }
    }

    fn failure(message: &str) -> Self {
        Self {
            status: STATUS_INTERNAL_ERROR,
            body: Some(json!({ "error": message })),
        }
    }
}

/// Responds to a cross-origin preflight probe.
///
/// The probe carries no payload and triggers no workflow.
#[must_use]
pub const fn preflight() -> ApiResponse {
    ApiResponse {
        status: STATUS_OK,
        body: None,
    }
}

/// Handles a task-creation request.
///
/// Deserializes the JSON body into a draft, runs the creation workflow,
/// and maps the result to an HTTP-style response: `200` with
/// `{"success": true, "task": ...}` on success, `500` with
/// `{"error": ...}` on any failure. Warnings recorded on a successful
/// outcome do not change the response; they are logged inside the
/// workflow.
pub async fn handle_create_task<TS, XS, D, M, C>(
    service: &TaskCreationService<TS, XS, D, M, C>,
    body: Value,
) -> ApiResponse
where
    TS: TaskStore,
    XS: TicketStore,
    D: ProfileDirectory,
    M: Mailer,
    C: Clock + Send + Sync,
{
    let draft: TaskDraft = match serde_json::from_value(body) {
        Ok(draft) => draft,
        Err(err) => {
            error!(error = %err, "malformed task-creation request");
            return ApiResponse::failure(&err.to_string());
        }
    };

    match service.create_task_with_notification(&draft).await {
        Ok(outcome) => match serde_json::to_value(outcome.task()) {
            Ok(task) => ApiResponse::ok(json!({ "success": true, "task": task })),
            Err(err) => {
                error!(error = %err, "task serialization failed");
                ApiResponse::failure(&err.to_string())
            }
        },
        Err(err) => {
            error!(error = %err, "task creation failed");
            ApiResponse::failure(&err.to_string())
        }
    }
}
