use serde::{Deserialize, Serialize};

use super::config::EngineConfig;

/// Importance tier assigned to a document before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentImportance {
    High,
    Medium,
    Low,
}

/// Discrete contributions to a document score, kept separate for audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub expiry_score: u8,
    pub importance_score: u8,
    pub history_score: u8,
}

/// Outcome of scoring one document against the notification threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentScore {
    pub total: u8,
    pub breakdown: ScoreBreakdown,
    pub should_notify: bool,
}

/// Fixed-weight urgency model for expiry-bearing documents.
///
/// Deterministic and side-effect free: the same inputs always produce the same
/// score. Callers are expected to have filtered out non-positive
/// `days_to_expiry` values before scoring.
pub fn score_document(
    days_to_expiry: i64,
    importance: DocumentImportance,
    has_late_renewal_before: bool,
    config: &EngineConfig,
) -> DocumentScore {
    let expiry_score = if days_to_expiry <= config.expiry_critical_days {
        3
    } else if days_to_expiry <= config.expiry_soon_days {
        2
    } else if days_to_expiry <= config.expiry_window_days {
        1
    } else {
        0
    };

    let importance_score = match importance {
        DocumentImportance::High => 2,
        DocumentImportance::Medium => 1,
        DocumentImportance::Low => 0,
    };

    let history_score = u8::from(has_late_renewal_before);

    let total = expiry_score + importance_score + history_score;

    DocumentScore {
        total,
        breakdown: ScoreBreakdown {
            expiry_score,
            importance_score,
            history_score,
        },
        should_notify: total >= config.notify_threshold,
    }
}
