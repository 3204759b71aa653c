//! In-memory profile directory for tests and local use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{AssigneeProfile, UserId},
    ports::{DirectoryError, DirectoryResult, ProfileDirectory},
};

/// Thread-safe in-memory profile directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    profiles: HashMap<UserId, AssigneeProfile>,
    fail_lookups: bool,
}

impl InMemoryProfileDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a profile into the directory.
    pub fn insert(&self, profile: AssigneeProfile) {
        if let Ok(mut state) = self.state.write() {
            state.profiles.insert(profile.id(), profile);
        }
    }

    /// Makes subsequent lookups fail, simulating directory unavailability.
    pub fn fail_lookups(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_lookups = fail;
        }
    }
}

#[async_trait]
impl ProfileDirectory for InMemoryProfileDirectory {
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<AssigneeProfile>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        if state.fail_lookups {
            return Err(DirectoryError::lookup(std::io::Error::other(
                "injected directory failure",
            )));
        }
        Ok(state.profiles.get(&id).cloned())
    }
}
