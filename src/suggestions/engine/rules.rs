use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};

use super::super::analysis::DocumentAnalysis;
use super::super::domain::{
    AppointmentRecord, AppointmentStatus, DelegationRecord, DelegationStatus, DocumentKind,
    HajjRecord, HajjRegistrationStatus, Priority, Suggestion, SuggestionKind, UserRecordSnapshot,
    ViolationRecord, ViolationStatus,
};
use super::config::EngineConfig;
use super::scoring::{score_document, DocumentImportance};

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    numerator.div_euclid(denominator) + i64::from(numerator.rem_euclid(denominator) != 0)
}

/// Whole days until the given calendar date, rounded up. Negative once past.
pub(crate) fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let target = date.and_time(NaiveTime::MIN).and_utc();
    ceil_div((target - now).num_seconds(), SECONDS_PER_DAY)
}

/// Whole hours until the given instant, rounded up. Negative once past.
pub(crate) fn hours_until(at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ceil_div((at - now).num_seconds(), SECONDS_PER_HOUR)
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// 12-hour clock label for appointment reminders, e.g. "3:05 PM".
fn clock_label(at: DateTime<Utc>) -> String {
    let (pm, hour) = at.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        at.minute(),
        if pm { "PM" } else { "AM" }
    )
}

/// Score every present identity document and emit suggestions for the ones
/// crossing the notification threshold. Documents already expired are left to
/// the renewal flows rather than the suggestion rail.
pub(crate) fn evaluate_documents(
    snapshot: &UserRecordSnapshot,
    config: &EngineConfig,
    now: DateTime<Utc>,
    suggestions: &mut Vec<Suggestion>,
    analyzed: &mut Vec<DocumentAnalysis>,
) {
    for kind in DocumentKind::ordered() {
        let Some(document) = snapshot.document(kind) else {
            continue;
        };

        let days = days_until(document.expiry_date, now);
        if days <= 0 {
            continue;
        }

        let importance = match kind {
            DocumentKind::NationalId => DocumentImportance::High,
            DocumentKind::Passport | DocumentKind::DrivingLicense => {
                if days <= config.document_high_importance_days {
                    DocumentImportance::High
                } else {
                    DocumentImportance::Medium
                }
            }
        };

        // Renewal history is not part of the snapshot, so the history signal
        // never fires today.
        let has_late_renewal_before = false;
        let score = score_document(days, importance, has_late_renewal_before, config);

        analyzed.push(DocumentAnalysis {
            document_type: kind.label(),
            days_to_expiry: days,
            document_importance: importance,
            has_late_renewal_before,
            score: score.total,
            score_breakdown: score.breakdown,
            should_notify: score.should_notify,
            threshold: config.notify_threshold,
        });

        if !score.should_notify {
            continue;
        }

        let priority = if days <= config.priority_high_days {
            Priority::High
        } else if days <= config.priority_medium_days {
            Priority::Medium
        } else {
            Priority::Low
        };

        suggestions.push(Suggestion {
            id: format!("{}-{}", kind.slug(), document.id),
            title: format!("{} Expiring Soon", kind.label()),
            description: format!(
                "Your {} will expire in {} day{}. Would you like to renew it now?",
                kind.label(),
                days,
                plural(days)
            ),
            action_url: kind.action_url(),
            expiry_date: Some(format!("{} day{}", days, plural(days))),
            kind: SuggestionKind::Document,
            priority,
            service_id: Some(document.id),
        });
    }
}

/// Flag unpaid violations whose early-payment discount is about to lapse.
/// A flat time-window check, independent of the document scoring model.
pub(crate) fn evaluate_violations(
    violations: &[ViolationRecord],
    config: &EngineConfig,
    now: DateTime<Utc>,
    suggestions: &mut Vec<Suggestion>,
) {
    for violation in violations {
        if violation.status != ViolationStatus::Unpaid {
            continue;
        }
        let Some(discount_expiry) = violation.discount_expiry else {
            continue;
        };

        let hours = hours_until(discount_expiry, now);
        if hours > 0 && hours <= config.violation_discount_hours {
            suggestions.push(Suggestion {
                id: format!("violation-{}", violation.id),
                title: "Violation Discount Ending".to_string(),
                description: format!(
                    "A traffic violation discount expires in {} hour{}. Pay now to save.",
                    hours,
                    plural(hours)
                ),
                action_url: format!("/services/violation/{}", violation.id),
                expiry_date: Some(format!("{} hour{}", hours, plural(hours))),
                kind: SuggestionKind::Violation,
                priority: Priority::High,
                service_id: Some(violation.id),
            });
        }
    }
}

/// Remind the user about scheduled appointments landing within the window.
pub(crate) fn evaluate_appointments(
    appointments: &[AppointmentRecord],
    config: &EngineConfig,
    now: DateTime<Utc>,
    suggestions: &mut Vec<Suggestion>,
) {
    for appointment in appointments {
        if appointment.status != AppointmentStatus::Scheduled {
            continue;
        }

        let hours = hours_until(appointment.appointment_date, now);
        if hours > 0 && hours <= config.appointment_reminder_hours {
            suggestions.push(Suggestion {
                id: format!("appointment-{}", appointment.id),
                title: "Appointment Coming Up".to_string(),
                description: format!(
                    "You have an appointment in {} hour{} at {}.",
                    hours,
                    plural(hours),
                    clock_label(appointment.appointment_date)
                ),
                action_url: format!("/services/appointment/{}", appointment.id),
                expiry_date: Some(format!("{} hour{}", hours, plural(hours))),
                kind: SuggestionKind::Appointment,
                priority: Priority::Medium,
                service_id: Some(appointment.id),
            });
        }
    }
}

/// Warn about active delegations close to their expiry date.
pub(crate) fn evaluate_delegations(
    delegations: &[DelegationRecord],
    config: &EngineConfig,
    now: DateTime<Utc>,
    suggestions: &mut Vec<Suggestion>,
) {
    for delegation in delegations {
        if delegation.status != DelegationStatus::Active {
            continue;
        }

        let days = days_until(delegation.expiry_date, now);
        if days > 0 && days <= config.delegation_notice_days {
            let priority = if days <= config.delegation_urgent_days {
                Priority::High
            } else {
                Priority::Medium
            };
            suggestions.push(Suggestion {
                id: format!("delegation-{}", delegation.id),
                title: "Delegation Expiring".to_string(),
                description: format!(
                    "Your delegation authority expires in {} day{}. Renew to maintain access.",
                    days,
                    plural(days)
                ),
                action_url: format!("/services/delegation/{}", delegation.id),
                expiry_date: Some(format!("{} day{}", days, plural(days))),
                kind: SuggestionKind::Delegation,
                priority,
                service_id: Some(delegation.id),
            });
        }
    }
}

/// Registration window runs December through June.
fn hajj_season_open(now: DateTime<Utc>) -> bool {
    let month = now.month();
    month == 12 || month <= 6
}

/// Prompt eligible, unregistered users while the Hajj season is open.
/// Emits at most one suggestion per user.
pub(crate) fn evaluate_hajj(
    hajj: Option<&HajjRecord>,
    now: DateTime<Utc>,
    suggestions: &mut Vec<Suggestion>,
) {
    let Some(record) = hajj else {
        return;
    };

    if record.eligible
        && record.registration_status != HajjRegistrationStatus::Registered
        && hajj_season_open(now)
    {
        suggestions.push(Suggestion {
            id: format!("hajj-{}", record.id),
            title: "Hajj Registration Open".to_string(),
            description: "You are eligible for Hajj. Registration period is now open. \
                          Apply early to secure your spot."
                .to_string(),
            action_url: "/services/hajj".to_string(),
            expiry_date: None,
            kind: SuggestionKind::Hajj,
            priority: Priority::Medium,
            service_id: Some(record.id),
        });
    }
}
