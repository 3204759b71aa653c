//! Orchestration tests for the task-creation workflow.

use std::sync::Arc;

use crate::task::{
    adapters::memory::{
        InMemoryProfileDirectory, InMemoryTaskStore, InMemoryTicketStore, RecordingMailer,
    },
    domain::{AssigneeProfile, EmailAddress, UserId},
    ports::{
        DirectoryResult, EmailMessage, MailerResult, ProfileDirectory, TaskStore, TicketStore,
    },
    services::{NotificationWarning, TaskCreationError, TaskCreationService},
    validation::TaskDraft,
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

const DEPARTMENT: &str = "6e5a1c2e-9b1f-4f6a-8c3d-2a7b9e4d1f05";
const CREATOR: &str = "b2f8d4a6-3c1e-4b7a-9d5f-8e2c6a4b0d13";

type InMemoryService = TaskCreationService<
    InMemoryTaskStore,
    InMemoryTicketStore,
    InMemoryProfileDirectory,
    RecordingMailer,
    DefaultClock,
>;

struct Harness {
    tasks: Arc<InMemoryTaskStore>,
    tickets: Arc<InMemoryTicketStore>,
    directory: Arc<InMemoryProfileDirectory>,
    mailer: Arc<RecordingMailer>,
    service: InMemoryService,
}

#[fixture]
fn harness() -> Harness {
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
    Harness {
        tasks,
        tickets,
        directory,
        mailer,
        service,
    }
}

fn base_draft() -> TaskDraft {
    TaskDraft {
        title: "Fix printer".to_owned(),
        description: Some("Third floor printer is jammed".to_owned()),
        email: None,
        priority: "high".to_owned(),
        status: "todo".to_owned(),
        department_id: DEPARTMENT.to_owned(),
        created_by: CREATOR.to_owned(),
        assigned_to: None,
        due_date: Some("2025-06-01".to_owned()),
    }
}

fn draft_assigned_to(assignee: UserId) -> TaskDraft {
    TaskDraft {
        assigned_to: Some(assignee.to_string()),
        ..base_draft()
    }
}

fn seed_profile(harness: &Harness, name: Option<&str>) -> UserId {
    let assignee = UserId::new();
    let email = EmailAddress::new("v@x.com").expect("valid address");
    harness
        .directory
        .insert(AssigneeProfile::new(assignee, email, name.map(str::to_owned)));
    assignee
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unassigned_draft_creates_task_without_side_effects(harness: Harness) {
    let outcome = harness
        .service
        .create_task_with_notification(&base_draft())
        .await
        .expect("creation should succeed");

    let stored = harness
        .tasks
        .find_by_id(outcome.task().id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.as_ref(), Some(outcome.task()));
    assert!(outcome.warnings().is_empty());
    assert!(harness.mailer.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigned_draft_creates_ticket_and_notifies_assignee(harness: Harness) {
    let assignee = seed_profile(&harness, Some("Vee"));

    let outcome = harness
        .service
        .create_task_with_notification(&draft_assigned_to(assignee))
        .await
        .expect("creation should succeed");

    assert!(outcome.warnings().is_empty());

    let tickets = harness
        .tickets
        .list_by_assignee(assignee)
        .await
        .expect("ticket listing should succeed");
    assert_eq!(tickets.len(), 1);
    let ticket = tickets.first().expect("one ticket listed");
    assert_eq!(ticket.title(), "Task Assignment: Fix printer");
    assert_eq!(ticket.status(), "open");

    let sent = harness.mailer.sent();
    assert_eq!(sent.len(), 1);
    let message = sent.first().expect("one message recorded");
    assert_eq!(message.to.as_str(), "v@x.com");
    assert_eq!(message.subject, "New Task Assigned: Fix printer");
    assert!(message.html.contains("Hello Vee,"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn override_email_wins_while_profile_supplies_the_name(harness: Harness) {
    let assignee = seed_profile(&harness, Some("Vee"));
    let draft = TaskDraft {
        email: Some("boss@x.com".to_owned()),
        ..draft_assigned_to(assignee)
    };

    let outcome = harness
        .service
        .create_task_with_notification(&draft)
        .await
        .expect("creation should succeed");

    assert!(outcome.warnings().is_empty());
    let sent = harness.mailer.sent();
    assert_eq!(sent.len(), 1);
    let message = sent.first().expect("one message recorded");
    assert_eq!(message.to.as_str(), "boss@x.com");
    assert!(message.html.contains("Hello Vee,"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn override_email_without_assignee_uses_default_name(harness: Harness) {
    let draft = TaskDraft {
        email: Some("boss@x.com".to_owned()),
        ..base_draft()
    };

    let outcome = harness
        .service
        .create_task_with_notification(&draft)
        .await
        .expect("creation should succeed");

    assert!(outcome.warnings().is_empty());
    let sent = harness.mailer.sent();
    assert_eq!(sent.len(), 1);
    let message = sent.first().expect("one message recorded");
    assert_eq!(message.to.as_str(), "boss@x.com");
    assert!(message.html.contains("Hello User,"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_profile_succeeds_without_ticket_or_email(harness: Harness) {
    let assignee = UserId::new();

    let outcome = harness
        .service
        .create_task_with_notification(&draft_assigned_to(assignee))
        .await
        .expect("creation should succeed");

    assert_eq!(outcome.warnings().len(), 1);
    assert!(matches!(
        outcome.warnings().first(),
        Some(NotificationWarning::AssigneeLookupFailed { .. })
    ));

    let tickets = harness
        .tickets
        .list_by_assignee(assignee)
        .await
        .expect("ticket listing should succeed");
    assert!(tickets.is_empty());
    assert!(harness.mailer.sent().is_empty());

    let stored = harness
        .tasks
        .find_by_id(outcome.task().id())
        .await
        .expect("lookup should succeed");
    assert!(stored.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_outage_is_recorded_as_lookup_warning(harness: Harness) {
    let assignee = seed_profile(&harness, Some("Vee"));
    harness.directory.fail_lookups(true);

    let outcome = harness
        .service
        .create_task_with_notification(&draft_assigned_to(assignee))
        .await
        .expect("creation should succeed");

    assert!(matches!(
        outcome.warnings().first(),
        Some(NotificationWarning::AssigneeLookupFailed { .. })
    ));
    assert!(harness.mailer.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ticket_store_failure_still_sends_the_email(harness: Harness) {
    let assignee = seed_profile(&harness, Some("Vee"));
    harness.tickets.fail_inserts(true);

    let outcome = harness
        .service
        .create_task_with_notification(&draft_assigned_to(assignee))
        .await
        .expect("creation should succeed");

    assert_eq!(outcome.warnings().len(), 1);
    assert!(matches!(
        outcome.warnings().first(),
        Some(NotificationWarning::TicketCreationFailed { .. })
    ));
    assert_eq!(harness.mailer.sent().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mailer_outage_is_recorded_as_dispatch_warning(harness: Harness) {
    let assignee = seed_profile(&harness, Some("Vee"));
    harness.mailer.fail_sends(true);

    let outcome = harness
        .service
        .create_task_with_notification(&draft_assigned_to(assignee))
        .await
        .expect("creation should succeed");

    assert_eq!(outcome.warnings().len(), 1);
    assert!(matches!(
        outcome.warnings().first(),
        Some(NotificationWarning::EmailDispatchFailed { .. })
    ));

    let tickets = harness
        .tickets
        .list_by_assignee(assignee)
        .await
        .expect("ticket listing should succeed");
    assert_eq!(tickets.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_store_failure_aborts_the_workflow(harness: Harness) {
    let assignee = seed_profile(&harness, Some("Vee"));
    harness.tasks.fail_inserts(true);

    let result = harness
        .service
        .create_task_with_notification(&draft_assigned_to(assignee))
        .await;

    assert!(matches!(result, Err(TaskCreationError::Persistence(_))));
    let tickets = harness
        .tickets
        .list_by_assignee(assignee)
        .await
        .expect("ticket listing should succeed");
    assert!(tickets.is_empty());
    assert!(harness.mailer.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlong_title_is_rejected_before_any_write(harness: Harness) {
    let draft = TaskDraft {
        title: "x".repeat(201),
        ..base_draft()
    };

    let result = harness.service.create_task_with_notification(&draft).await;

    assert!(matches!(result, Err(TaskCreationError::Validation(_))));
    assert!(harness.tasks.is_empty().expect("store should be readable"));
    assert!(harness.mailer.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_priority_is_rejected_before_any_write(harness: Harness) {
    let draft = TaskDraft {
        priority: "urgent".to_owned(),
        ..base_draft()
    };

    let result = harness.service.create_task_with_notification(&draft).await;

    assert!(matches!(result, Err(TaskCreationError::Validation(_))));
    assert!(harness.tasks.is_empty().expect("store should be readable"));
}

mockall::mock! {
    Directory {}

    #[async_trait]
    impl ProfileDirectory for Directory {
        async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<AssigneeProfile>>;
    }
}

mockall::mock! {
    OutboundMailer {}

    #[async_trait]
    impl crate::task::ports::Mailer for OutboundMailer {
        async fn send(&self, message: &EmailMessage) -> MailerResult<()>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn workflow_consults_directory_once_and_sends_once() {
    let assignee = UserId::new();
    let profile = AssigneeProfile::new(
        assignee,
        EmailAddress::new("v@x.com").expect("valid address"),
        Some("Vee".to_owned()),
    );

    let mut directory = MockDirectory::new();
    directory
        .expect_find_by_id()
        .withf(move |id| *id == assignee)
        .times(1)
        .returning(move |_| Ok(Some(profile.clone())));

    let mut mailer = MockOutboundMailer::new();
    mailer
        .expect_send()
        .withf(|message| message.to.as_str() == "v@x.com")
        .times(1)
        .returning(|_| Ok(()));

    let service = TaskCreationService::new(
        Arc::new(InMemoryTaskStore::new()),
        Arc::new(InMemoryTicketStore::new()),
        Arc::new(directory),
        Arc::new(mailer),
        Arc::new(DefaultClock),
    );

    let outcome = service
        .create_task_with_notification(&draft_assigned_to(assignee))
        .await
        .expect("creation should succeed");

    assert!(outcome.warnings().is_empty());
}
