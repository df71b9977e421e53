use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Priority, Suggestion};
use super::engine::scoring::{DocumentImportance, ScoreBreakdown};

/// Scoring trail for one analyzed document, exposed for demos and audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub document_type: &'static str,
    pub days_to_expiry: i64,
    pub document_importance: DocumentImportance,
    pub has_late_renewal_before: bool,
    pub score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub should_notify: bool,
    pub threshold: u8,
}

/// Suggestion counts grouped by display priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn record(&mut self, priority: Priority) {
        match priority {
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }
}

/// Full evaluation trail: what went in, which rules ran, and what came out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    pub evaluated_at: DateTime<Utc>,
    pub documents_analyzed: Vec<DocumentAnalysis>,
    pub rules_applied: Vec<&'static str>,
    pub total_suggestions: usize,
    pub by_priority: PriorityCounts,
    pub by_type: BTreeMap<&'static str, usize>,
    pub suggestions: Vec<Suggestion>,
}

/// Human-readable summary of every rule the engine applies, in order.
pub fn rules_applied() -> Vec<&'static str> {
    vec![
        "Document Expiry Rule: check whether a document expires within 60 days",
        "Urgency Scoring Rule: combine expiry urgency, document importance, and renewal history",
        "Threshold Rule: notify when the combined score reaches 3",
        "Violation Discount Rule: alert while a discount expires within 72 hours",
        "Appointment Reminder Rule: notify 24 hours before scheduled appointments",
        "Delegation Expiry Rule: alert 7 days before a delegation expires",
        "Hajj Eligibility Rule: prompt eligible users during the open season",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_counts_accumulate_per_bucket() {
        let mut counts = PriorityCounts::default();
        counts.record(Priority::High);
        counts.record(Priority::High);
        counts.record(Priority::Low);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 0);
        assert_eq!(counts.low, 1);
    }

    #[test]
    fn one_rule_description_per_evaluator_plus_scoring() {
        assert_eq!(rules_applied().len(), 7);
    }
}
