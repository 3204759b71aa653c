//! Domain-focused tests for task, ticket, and profile construction.

use crate::task::domain::{
    AssigneeProfile, CreateTaskPayload, DepartmentId, EmailAddress, Priority, Task,
    TaskDomainError, Ticket, UserId,
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn payload() -> CreateTaskPayload {
    CreateTaskPayload {
        title: "Fix printer".to_owned(),
        description: Some("Third floor printer is jammed".to_owned()),
        priority: Priority::High,
        status: "todo".to_owned(),
        department_id: DepartmentId::new(),
        created_by: UserId::new(),
        assigned_to: Some(UserId::new()),
        due_date: NaiveDate::from_ymd_opt(2025, 6, 1),
        override_email: None,
    }
}

#[rstest]
fn task_new_carries_payload_fields(payload: CreateTaskPayload, clock: DefaultClock) {
    let expected = payload.clone();

    let task = Task::new(payload, &clock);

    assert_eq!(task.title(), expected.title);
    assert_eq!(task.description(), expected.description.as_deref());
    assert_eq!(task.priority(), expected.priority);
    assert_eq!(task.status(), expected.status);
    assert_eq!(task.department_id(), expected.department_id);
    assert_eq!(task.created_by(), expected.created_by);
    assert_eq!(task.assigned_to(), expected.assigned_to);
    assert_eq!(task.due_date(), expected.due_date);
    assert!(task.override_email().is_none());
}

#[rstest]
fn task_new_assigns_fresh_identifiers(payload: CreateTaskPayload, clock: DefaultClock) {
    let first = Task::new(payload.clone(), &clock);
    let second = Task::new(payload, &clock);

    assert_ne!(first.id(), second.id());
}

#[rstest]
fn ticket_derivation_synthesizes_title_and_status(
    payload: CreateTaskPayload,
    clock: DefaultClock,
) {
    let assignee = payload.assigned_to.expect("payload carries an assignee");
    let task = Task::new(payload, &clock);

    let ticket = Ticket::derived_from(&task, assignee, &clock);

    assert_eq!(ticket.title(), "Task Assignment: Fix printer");
    assert_eq!(ticket.status(), "open");
    assert_eq!(ticket.assigned_to(), assignee);
}

#[rstest]
fn ticket_derivation_inherits_task_fields(payload: CreateTaskPayload, clock: DefaultClock) {
    let assignee = payload.assigned_to.expect("payload carries an assignee");
    let task = Task::new(payload, &clock);

    let ticket = Ticket::derived_from(&task, assignee, &clock);

    assert_eq!(ticket.description(), task.description());
    assert_eq!(ticket.priority(), task.priority());
    assert_eq!(ticket.department_id(), task.department_id());
    assert_eq!(ticket.created_by(), task.created_by());
}

#[rstest]
fn profile_display_name_prefers_full_name() {
    let email = EmailAddress::new("v@x.com").expect("valid address");
    let profile = AssigneeProfile::new(UserId::new(), email, Some("Vee".to_owned()));

    assert_eq!(profile.display_name(), "Vee");
}

#[rstest]
fn profile_display_name_falls_back_to_email() {
    let email = EmailAddress::new("v@x.com").expect("valid address");
    let profile = AssigneeProfile::new(UserId::new(), email, None);

    assert_eq!(profile.display_name(), "v@x.com");
}

#[rstest]
#[case("low", Priority::Low)]
#[case("medium", Priority::Medium)]
#[case("high", Priority::High)]
fn priority_parses_allowed_labels(#[case] label: &str, #[case] expected: Priority) {
    let priority = Priority::try_from(label).expect("label should parse");

    assert_eq!(priority, expected);
    assert_eq!(priority.as_str(), label);
}

#[rstest]
fn priority_rejects_unknown_label() {
    let result = Priority::try_from("urgent");

    assert!(result.is_err());
}

#[rstest]
fn email_address_trims_surrounding_whitespace() {
    let address = EmailAddress::new("  v@x.com  ").expect("valid address");

    assert_eq!(address.as_str(), "v@x.com");
}

#[rstest]
fn email_address_rejects_overlong_value() {
    let local = "a".repeat(250);
    let result = EmailAddress::new(format!("{local}@example.com"));

    assert!(matches!(result, Err(TaskDomainError::EmailTooLong { .. })));
}
