//! Domain model for the task-creation workflow.
//!
//! The task domain models validated task records, tickets derived from
//! assignment, and the read-only assignee profiles used for notification
//! routing, keeping all infrastructure concerns outside the domain
//! boundary.

mod email;
mod error;
mod ids;
mod priority;
mod profile;
mod task;
mod ticket;

pub use email::EmailAddress;
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{DepartmentId, TaskId, TicketId, UserId};
pub use priority::Priority;
pub use profile::AssigneeProfile;
pub use task::{CreateTaskPayload, PersistedTaskData, Task};
pub use ticket::{PersistedTicketData, Ticket};
