use serde::{Deserialize, Serialize};

/// Per-rule thresholds for the suggestion engine.
///
/// Every cutoff the evaluators apply lives here so deployments can tune a
/// single injected struct instead of chasing literals through the rules. The
/// defaults reproduce the portal's established behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Days-to-expiry at or under which a document scores 3 urgency points.
    pub expiry_critical_days: i64,
    /// Days-to-expiry at or under which a document scores 2 urgency points.
    pub expiry_soon_days: i64,
    /// Days-to-expiry at or under which a document scores 1 urgency point.
    pub expiry_window_days: i64,
    /// Minimum total score required before a document suggestion is emitted.
    pub notify_threshold: u8,
    /// Passports and driving licenses count as high-importance inside this window.
    pub document_high_importance_days: i64,
    /// Document suggestions are high priority at or under this many days.
    pub priority_high_days: i64,
    /// Document suggestions are medium priority at or under this many days.
    pub priority_medium_days: i64,
    /// Unpaid violations alert while the discount expires within this window.
    pub violation_discount_hours: i64,
    /// Scheduled appointments alert within this window.
    pub appointment_reminder_hours: i64,
    /// Active delegations alert while expiring within this window.
    pub delegation_notice_days: i64,
    /// Delegation alerts escalate to high priority at or under this many days.
    pub delegation_urgent_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            expiry_critical_days: 7,
            expiry_soon_days: 30,
            expiry_window_days: 60,
            notify_threshold: 3,
            document_high_importance_days: 30,
            priority_high_days: 7,
            priority_medium_days: 14,
            violation_discount_hours: 72,
            appointment_reminder_hours: 24,
            delegation_notice_days: 7,
            delegation_urgent_days: 3,
        }
    }
}
