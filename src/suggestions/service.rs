use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::analysis::SuggestionReport;
use super::domain::{Suggestion, UserId, UserRecordSnapshot};
use super::engine::{EngineConfig, SuggestionEngine};
use super::repository::{RepositoryError, SnapshotRepository};

/// Facade composing the snapshot repository and the rule engine.
///
/// Evaluation is a single synchronous pass over one snapshot; concurrent calls
/// share nothing mutable, so the service is freely cloneable across handlers.
pub struct SuggestionService<R> {
    repository: Arc<R>,
    engine: Arc<SuggestionEngine>,
}

impl<R> Clone for SuggestionService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            engine: self.engine.clone(),
        }
    }
}

impl<R> SuggestionService<R>
where
    R: SnapshotRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EngineConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(SuggestionEngine::new(config)),
        }
    }

    /// Ordered suggestion list for one user at the given instant.
    pub fn suggestions_for(
        &self,
        user: UserId,
        now: DateTime<Utc>,
    ) -> Result<Vec<Suggestion>, SuggestionServiceError> {
        let snapshot = self.snapshot(user)?;
        let suggestions = self.engine.generate(&snapshot, now);
        debug!(%user, count = suggestions.len(), "generated suggestions");
        Ok(suggestions)
    }

    /// Suggestion list plus the full scoring trail, for the demo panel.
    pub fn report_for(
        &self,
        user: UserId,
        now: DateTime<Utc>,
    ) -> Result<SuggestionReport, SuggestionServiceError> {
        let snapshot = self.snapshot(user)?;
        Ok(self.engine.generate_with_analysis(&snapshot, now))
    }

    pub fn users(&self) -> Result<Vec<UserId>, SuggestionServiceError> {
        Ok(self.repository.users()?)
    }

    fn snapshot(&self, user: UserId) -> Result<UserRecordSnapshot, SuggestionServiceError> {
        self.repository
            .fetch(user)?
            .ok_or(SuggestionServiceError::UnknownUser(user))
    }
}

/// Error raised by the suggestion service.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionServiceError {
    #[error("no user found with ID: {0}")]
    UnknownUser(UserId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
