//! `PostgreSQL` profile directory implementation.

use super::{PgPool, models::ProfileRow, schema::profiles};
use crate::task::{
    domain::{AssigneeProfile, EmailAddress, UserId},
    ports::{DirectoryError, DirectoryResult, ProfileDirectory},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed profile directory.
#[derive(Debug, Clone)]
pub struct PostgresProfileDirectory {
    pool: PgPool,
}

impl PostgresProfileDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileDirectory for PostgresProfileDirectory {
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<AssigneeProfile>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DirectoryError::lookup)?;
            let row = profiles::table
                .filter(profiles::id.eq(id.into_inner()))
                .select(ProfileRow::as_select())
                .first::<ProfileRow>(&mut connection)
                .optional()
                .map_err(DirectoryError::lookup)?;
            row.map(row_to_profile).transpose()
        })
        .await
        .map_err(DirectoryError::lookup)?
    }
}

fn row_to_profile(row: ProfileRow) -> DirectoryResult<AssigneeProfile> {
    let email = EmailAddress::new(row.email).map_err(DirectoryError::lookup)?;
    Ok(AssigneeProfile::new(
        UserId::from_uuid(row.id),
        email,
        row.full_name,
    ))
}
