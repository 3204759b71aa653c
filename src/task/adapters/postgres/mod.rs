//! `PostgreSQL` adapter implementations of the task ports.
//!
//! Synchronous Diesel operations are offloaded with
//! [`tokio::task::spawn_blocking`] so repository calls never block the
//! async executor.

mod directory;
pub mod models;
pub mod schema;
mod store;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the task adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

pub use directory::PostgresProfileDirectory;
pub use store::{PostgresTaskStore, PostgresTicketStore};
