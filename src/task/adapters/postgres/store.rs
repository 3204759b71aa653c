//! `PostgreSQL` store implementations for tasks and tickets.

use super::{
    PgPool,
    models::{NewTaskRow, NewTicketRow, TaskRow, TicketRow},
    schema::{tasks, tickets},
};
use crate::task::{
    domain::{
        DepartmentId, EmailAddress, PersistedTaskData, PersistedTicketData, Priority, Task, TaskId,
        Ticket, TicketId, UserId,
    },
    ports::{StoreError, StoreResult, TaskStore, TicketStore},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

/// Runs a blocking store operation on a dedicated thread pool.
async fn run_blocking<F, T>(pool: &PgPool, f: F) -> StoreResult<T>
where
    F: FnOnce(&mut PgConnection) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(StoreError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(StoreError::persistence)?
}

/// Maps a Diesel insert error into the store taxonomy.
fn map_insert_error(err: DieselError, record_id: Uuid) -> StoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            StoreError::Duplicate(record_id)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info) => {
            StoreError::ForeignKey(describe_constraint(info.as_ref()))
        }
        _ => StoreError::persistence(err),
    }
}

/// Names the violated constraint for error reporting.
fn describe_constraint(info: &dyn DatabaseErrorInformation) -> String {
    info.constraint_name()
        .map_or_else(|| info.message().to_owned(), str::to_owned)
}

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: PgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, task: &Task) -> StoreResult<()> {
        let task_id = task.id().into_inner();
        let new_row = task_to_new_row(task);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_insert_error(err, task_id))?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(StoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_department(&self, department: DepartmentId) -> StoreResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::department_id.eq(department.into_inner()))
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(StoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

/// `PostgreSQL`-backed ticket store.
#[derive(Debug, Clone)]
pub struct PostgresTicketStore {
    pool: PgPool,
}

impl PostgresTicketStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketStore for PostgresTicketStore {
    async fn insert(&self, ticket: &Ticket) -> StoreResult<()> {
        let ticket_id = ticket.id().into_inner();
        let new_row = ticket_to_new_row(ticket);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(tickets::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_insert_error(err, ticket_id))?;
            Ok(())
        })
        .await
    }

    async fn list_by_assignee(&self, assignee: UserId) -> StoreResult<Vec<Ticket>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tickets::table
                .filter(tickets::assigned_to.eq(assignee.into_inner()))
                .order(tickets::created_at.desc())
                .select(TicketRow::as_select())
                .load::<TicketRow>(connection)
                .map_err(StoreError::persistence)?;
            rows.into_iter().map(row_to_ticket).collect()
        })
        .await
    }
}

fn task_to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        priority: task.priority().as_str().to_owned(),
        status: task.status().to_owned(),
        department_id: task.department_id().into_inner(),
        created_by: task.created_by().into_inner(),
        assigned_to: task.assigned_to().map(UserId::into_inner),
        due_date: task.due_date(),
        notify_email: task.override_email().map(|email| email.as_str().to_owned()),
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> StoreResult<Task> {
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(StoreError::persistence)?;
    let override_email = row
        .notify_email
        .map(EmailAddress::new)
        .transpose()
        .map_err(StoreError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        priority,
        status: row.status,
        department_id: DepartmentId::from_uuid(row.department_id),
        created_by: UserId::from_uuid(row.created_by),
        assigned_to: row.assigned_to.map(UserId::from_uuid),
        due_date: row.due_date,
        override_email,
        created_at: row.created_at,
    };
    Ok(Task::from_persisted(data))
}

fn ticket_to_new_row(ticket: &Ticket) -> NewTicketRow {
    NewTicketRow {
        id: ticket.id().into_inner(),
        title: ticket.title().to_owned(),
        description: ticket.description().map(str::to_owned),
        priority: ticket.priority().as_str().to_owned(),
        status: ticket.status().to_owned(),
        department_id: ticket.department_id().into_inner(),
        created_by: ticket.created_by().into_inner(),
        assigned_to: ticket.assigned_to().into_inner(),
        created_at: ticket.created_at(),
    }
}

fn row_to_ticket(row: TicketRow) -> StoreResult<Ticket> {
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(StoreError::persistence)?;

    let data = PersistedTicketData {
        id: TicketId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        priority,
        status: row.status,
        department_id: DepartmentId::from_uuid(row.department_id),
        created_by: UserId::from_uuid(row.created_by),
        assigned_to: UserId::from_uuid(row.assigned_to),
        created_at: row.created_at,
    };
    Ok(Ticket::from_persisted(data))
}
