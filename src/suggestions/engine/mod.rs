mod config;
pub(crate) mod rules;
pub mod scoring;

pub use config::EngineConfig;

use chrono::{DateTime, Utc};

use super::analysis::{rules_applied, PriorityCounts, SuggestionReport};
use super::domain::{Suggestion, UserRecordSnapshot};

/// Stateless rule engine turning a record snapshot into ordered suggestions.
///
/// Evaluators run in a fixed sequence (documents, violations, appointments,
/// delegations, Hajj) and the collected output is stable-sorted by priority,
/// so equal-priority suggestions keep their emission order.
pub struct SuggestionEngine {
    config: EngineConfig,
}

impl SuggestionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Produce the ordered suggestion list for one snapshot at one instant.
    pub fn generate(&self, snapshot: &UserRecordSnapshot, now: DateTime<Utc>) -> Vec<Suggestion> {
        self.run(snapshot, now).0
    }

    /// Produce the suggestion list together with its full evaluation trail.
    pub fn generate_with_analysis(
        &self,
        snapshot: &UserRecordSnapshot,
        now: DateTime<Utc>,
    ) -> SuggestionReport {
        let (suggestions, documents_analyzed) = self.run(snapshot, now);

        let mut by_priority = PriorityCounts::default();
        let mut by_type = std::collections::BTreeMap::new();
        for suggestion in &suggestions {
            by_priority.record(suggestion.priority);
            *by_type.entry(suggestion.kind.label()).or_insert(0) += 1;
        }

        SuggestionReport {
            evaluated_at: now,
            documents_analyzed,
            rules_applied: rules_applied(),
            total_suggestions: suggestions.len(),
            by_priority,
            by_type,
            suggestions,
        }
    }

    fn run(
        &self,
        snapshot: &UserRecordSnapshot,
        now: DateTime<Utc>,
    ) -> (Vec<Suggestion>, Vec<super::analysis::DocumentAnalysis>) {
        let mut suggestions = Vec::new();
        let mut analyzed = Vec::new();

        rules::evaluate_documents(snapshot, &self.config, now, &mut suggestions, &mut analyzed);
        rules::evaluate_violations(&snapshot.violations, &self.config, now, &mut suggestions);
        rules::evaluate_appointments(&snapshot.appointments, &self.config, now, &mut suggestions);
        rules::evaluate_delegations(&snapshot.delegations, &self.config, now, &mut suggestions);
        rules::evaluate_hajj(snapshot.hajj.as_ref(), now, &mut suggestions);

        // Stable, so insertion order breaks priority ties.
        suggestions.sort_by_key(|suggestion| suggestion.priority.rank());

        (suggestions, analyzed)
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
