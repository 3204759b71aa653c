//! Notification email rendering.

use crate::task::domain::Task;
use minijinja::{Environment, context};
use thiserror::Error;

/// Subject prefix for assignment notifications.
const SUBJECT_PREFIX: &str = "New Task Assigned: ";

/// HTML body for assignment notifications.
const NOTIFICATION_TEMPLATE: &str = r"<h1>New Task Assignment</h1>
<p>Hello {{ recipient_name }},</p>
<p>You have been assigned a new task:</p>
<h2>{{ title }}</h2>
<p><strong>Description:</strong> {{ description }}</p>
<p><strong>Priority:</strong> {{ priority }}</p>
<p><strong>Status:</strong> {{ status }}</p>
{% if due_date %}<p><strong>Due Date:</strong> {{ due_date }}</p>
{% endif %}<p>Please check your dashboard for more details.</p>
<p>Best regards,<br>Task Management System</p>
";

/// Error raised when the notification template fails to render.
#[derive(Debug, Error)]
#[error("notification template failed to render: {0}")]
pub struct NotificationRenderError(#[from] minijinja::Error);

/// Builds the subject line for a task notification.
#[must_use]
pub fn notification_subject(task: &Task) -> String {
    format!("{SUBJECT_PREFIX}{}", task.title())
}

/// Renders the HTML notification body for a task.
///
/// # Errors
///
/// Returns [`NotificationRenderError`] when template rendering fails.
pub fn render_notification(
    task: &Task,
    recipient_name: &str,
) -> Result<String, NotificationRenderError> {
    let mut environment = Environment::new();
    environment.add_template("notification", NOTIFICATION_TEMPLATE)?;
    let template = environment.get_template("notification")?;
    let rendered = template.render(context! {
        recipient_name,
        title => task.title(),
        description => task.description().unwrap_or_default(),
        priority => task.priority().as_str(),
        status => task.status(),
        due_date => task.due_date().map(|date| date.format("%-d %B %Y").to_string()),
    })?;
    Ok(rendered)
}
