use std::collections::HashMap;

use super::domain::{UserId, UserRecordSnapshot};

/// Storage abstraction supplying record snapshots, so the engine and service
/// can be exercised without a live database.
pub trait SnapshotRepository: Send + Sync {
    /// Fetch the complete record snapshot for a user, if the user exists.
    fn fetch(&self, user: UserId) -> Result<Option<UserRecordSnapshot>, RepositoryError>;

    /// All user identifiers the repository knows about, in ascending order.
    fn users(&self) -> Result<Vec<UserId>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// In-memory snapshot store backing the demo deployment and the test suite.
/// Populated once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshots: HashMap<UserId, UserRecordSnapshot>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: UserId, snapshot: UserRecordSnapshot) {
        self.snapshots.insert(user, snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotRepository for InMemorySnapshotStore {
    fn fetch(&self, user: UserId) -> Result<Option<UserRecordSnapshot>, RepositoryError> {
        Ok(self.snapshots.get(&user).cloned())
    }

    fn users(&self) -> Result<Vec<UserId>, RepositoryError> {
        let mut users: Vec<UserId> = self.snapshots.keys().copied().collect();
        users.sort();
        Ok(users)
    }
}
