//! Diesel schema for task workflow persistence.

diesel::table! {
    /// Task records created by the orchestration workflow.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Priority label.
        #[max_length = 10]
        priority -> Varchar,
        /// Free-form status label.
        #[max_length = 50]
        status -> Varchar,
        /// Owning department.
        department_id -> Uuid,
        /// Creator account.
        created_by -> Uuid,
        /// Optional assignee account.
        assigned_to -> Nullable<Uuid>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Optional explicit notification recipient.
        #[max_length = 255]
        notify_email -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tickets derived from task assignment.
    tickets (id) {
        /// Ticket identifier.
        id -> Uuid,
        /// Synthesized ticket title.
        #[max_length = 255]
        title -> Varchar,
        /// Inherited description.
        description -> Nullable<Text>,
        /// Inherited priority label.
        #[max_length = 10]
        priority -> Varchar,
        /// Ticket status label.
        #[max_length = 50]
        status -> Varchar,
        /// Owning department.
        department_id -> Uuid,
        /// Creator account.
        created_by -> Uuid,
        /// Assignee account.
        assigned_to -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Account profiles used for notification routing.
    profiles (id) {
        /// Account identifier.
        id -> Uuid,
        /// Contact email address.
        #[max_length = 255]
        email -> Varchar,
        /// Optional display name.
        #[max_length = 100]
        full_name -> Nullable<Varchar>,
    }
}
