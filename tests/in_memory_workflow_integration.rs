//! Behavioural integration tests for the task-creation workflow.
//!
//! These tests exercise the full path from the JSON facade through the
//! creation service and its in-memory collaborators, verifying the
//! persisted records and notification side effects together.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use eyre::{OptionExt, Result};
use mockable::DefaultClock;
use serde_json::json;
use taskdesk::api::handle_create_task;
use taskdesk::dashboard::TaskStats;
use taskdesk::task::adapters::memory::{
    InMemoryProfileDirectory, InMemoryTaskStore, InMemoryTicketStore, RecordingMailer,
};
use taskdesk::task::domain::{AssigneeProfile, DepartmentId, EmailAddress, UserId};
use taskdesk::task::ports::{TaskStore, TicketStore};
use taskdesk::task::services::TaskCreationService;
use tokio::runtime::Runtime;

type InMemoryService = TaskCreationService<
    InMemoryTaskStore,
    InMemoryTicketStore,
    InMemoryProfileDirectory,
    RecordingMailer,
    DefaultClock,
>;

struct World {
    tasks: Arc<InMemoryTaskStore>,
    tickets: Arc<InMemoryTicketStore>,
    directory: Arc<InMemoryProfileDirectory>,
    mailer: Arc<RecordingMailer>,
    service: InMemoryService,
}

fn world() -> World {
    let tasks = Arc::new(InMemoryTaskStore::new());
    let tickets = Arc::new(InMemoryTicketStore::new());
    let directory = Arc::new(InMemoryProfileDirectory::new());
    let mailer = Arc::new(RecordingMailer::new());
    let service = TaskCreationService::new(
        Arc::clone(&tasks),
        Arc::clone(&tickets),
        Arc::clone(&directory),
        Arc::clone(&mailer),
        Arc::new(DefaultClock),
    );
    World {
        tasks,
        tickets,
        directory,
        mailer,
        service,
    }
}

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

#[test]
fn assigned_task_flows_from_request_to_ticket_and_email() -> Result<()> {
    let rt = test_runtime();
    let world = world();

    let department = DepartmentId::new();
    let creator = UserId::new();
    let assignee = UserId::new();
    world.directory.insert(AssigneeProfile::new(
        assignee,
        EmailAddress::new("v@x.com")?,
        Some("Vee".to_owned()),
    ));

    let body = json!({
        "title": "Fix printer",
        "priority": "high",
        "status": "todo",
        "department_id": department.to_string(),
        "created_by": creator.to_string(),
        "assigned_to": assignee.to_string(),
        "due_date": "2025-06-01",
    });

    let response = rt.block_on(handle_create_task(&world.service, body));

    assert_eq!(response.status(), 200);
    let envelope = response.body().ok_or_eyre("success carries a body")?;
    assert_eq!(envelope.get("success"), Some(&json!(true)));

    let tasks = rt.block_on(world.tasks.list_by_department(department))?;
    assert_eq!(tasks.len(), 1);
    let task = tasks.first().ok_or_eyre("one task persisted")?;
    assert_eq!(task.title(), "Fix printer");
    assert_eq!(task.priority().as_str(), "high");
    assert_eq!(task.status(), "todo");
    assert_eq!(task.created_by(), creator);
    assert_eq!(task.assigned_to(), Some(assignee));
    assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2025, 6, 1));

    let tickets = rt.block_on(world.tickets.list_by_assignee(assignee))?;
    assert_eq!(tickets.len(), 1);
    let ticket = tickets.first().ok_or_eyre("one ticket persisted")?;
    assert_eq!(ticket.title(), "Task Assignment: Fix printer");
    assert_eq!(ticket.status(), "open");
    assert_eq!(ticket.department_id(), department);

    let sent = world.mailer.sent();
    assert_eq!(sent.len(), 1);
    let message = sent.first().ok_or_eyre("one email recorded")?;
    assert_eq!(message.to.as_str(), "v@x.com");
    assert_eq!(message.subject, "New Task Assigned: Fix printer");
    assert!(message.html.contains("Hello Vee,"));
    Ok(())
}

#[test]
fn rejected_request_leaves_every_store_untouched() -> Result<()> {
    let rt = test_runtime();
    let world = world();

    let body = json!({
        "title": "x".repeat(201),
        "priority": "high",
        "status": "todo",
        "department_id": DepartmentId::new().to_string(),
        "created_by": UserId::new().to_string(),
    });

    let response = rt.block_on(handle_create_task(&world.service, body));

    assert_eq!(response.status(), 500);
    let envelope = response.body().ok_or_eyre("failure carries a body")?;
    assert!(envelope.get("error").is_some());
    assert!(world.tasks.is_empty()?);
    assert!(world.mailer.sent().is_empty());
    Ok(())
}

#[test]
fn dashboard_stats_reflect_created_tasks() -> Result<()> {
    let rt = test_runtime();
    let world = world();

    let department = DepartmentId::new();
    let creator = UserId::new();
    for (title, status, due_date) in [
        ("Fix printer", "todo", Some("2025-06-01")),
        ("Order toner", "in-progress", None),
        ("File report", "done", Some("2025-06-01")),
    ] {
        let mut body = json!({
            "title": title,
            "priority": "medium",
            "status": status,
            "department_id": department.to_string(),
            "created_by": creator.to_string(),
        });
        if let (Some(due), Some(map)) = (due_date, body.as_object_mut()) {
            map.insert("due_date".to_owned(), json!(due));
        }
        let response = rt.block_on(handle_create_task(&world.service, body));
        assert_eq!(response.status(), 200);
    }

    let tasks = rt.block_on(world.tasks.list_by_department(department))?;
    let mut names = BTreeMap::new();
    names.insert(department, "Operations".to_owned());
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).ok_or_eyre("valid date")?;

    let stats = TaskStats::compute(&tasks, &names, today);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.open, 2);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.by_department.get("Operations"), Some(&3));
    Ok(())
}
