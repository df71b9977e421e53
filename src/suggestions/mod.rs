//! Smart suggestion generation for the citizen-services portal.
//!
//! Given a read-only snapshot of a user's documents, violations, appointments,
//! delegations, and Hajj status, the engine applies fixed per-domain rules and
//! returns a priority-ordered list of actionable notifications.

pub mod analysis;
pub mod domain;
pub mod engine;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{DocumentAnalysis, PriorityCounts, SuggestionReport};
pub use domain::{
    AppointmentRecord, AppointmentStatus, DelegationRecord, DelegationStatus, DocumentKind,
    DocumentRecord, HajjRecord, HajjRegistrationStatus, Priority, Suggestion, SuggestionKind,
    UserId, UserRecordSnapshot, ViolationRecord, ViolationStatus,
};
pub use engine::{EngineConfig, SuggestionEngine};
pub use repository::{InMemorySnapshotStore, RepositoryError, SnapshotRepository};
pub use router::suggestion_router;
pub use service::{SuggestionService, SuggestionServiceError};
