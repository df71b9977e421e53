use super::common::*;

use crate::suggestions::domain::{
    AppointmentStatus, DelegationStatus, HajjRegistrationStatus, Priority, SuggestionKind,
};

fn busy_snapshot() -> crate::suggestions::domain::UserRecordSnapshot {
    let mut snapshot = empty_snapshot();
    // National ID at 40 days lands at low priority, after everything else.
    snapshot.national_id = Some(document_expiring_in(2, 40));
    snapshot.violations.push(unpaid_violation(10, 10));
    snapshot
        .appointments
        .push(appointment_in(30, 6, AppointmentStatus::Scheduled));
    snapshot
        .delegations
        .push(delegation_expiring_in(40, 5, DelegationStatus::Active));
    snapshot.hajj = Some(hajj_record(true, HajjRegistrationStatus::NotRegistered));
    snapshot
}

#[test]
fn empty_snapshot_yields_empty_list() {
    let suggestions = engine().generate(&empty_snapshot(), fixed_now());
    assert!(suggestions.is_empty());
}

#[test]
fn suggestions_sort_by_priority_rank() {
    let suggestions = engine().generate(&busy_snapshot(), fixed_now());

    assert_eq!(suggestions.len(), 5);
    let ranks: Vec<u8> = suggestions
        .iter()
        .map(|suggestion| suggestion.priority.rank())
        .collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted);

    assert_eq!(suggestions[0].priority, Priority::High);
    assert_eq!(suggestions[0].kind, SuggestionKind::Violation);
    assert_eq!(
        suggestions.last().map(|suggestion| suggestion.kind),
        Some(SuggestionKind::Document)
    );
}

#[test]
fn equal_priority_preserves_emission_order() {
    // Appointment, delegation, and Hajj all land at medium priority; the
    // evaluator sequence must survive the sort.
    let suggestions = engine().generate(&busy_snapshot(), fixed_now());

    let medium: Vec<SuggestionKind> = suggestions
        .iter()
        .filter(|suggestion| suggestion.priority == Priority::Medium)
        .map(|suggestion| suggestion.kind)
        .collect();
    assert_eq!(
        medium,
        vec![
            SuggestionKind::Appointment,
            SuggestionKind::Delegation,
            SuggestionKind::Hajj
        ]
    );
}

#[test]
fn document_emission_follows_passport_id_license_order() {
    let mut snapshot = empty_snapshot();
    // All three at 5 days, all high priority, so order is pure emission order.
    snapshot.passport = Some(document_expiring_in(1, 5));
    snapshot.national_id = Some(document_expiring_in(2, 5));
    snapshot.driving_license = Some(document_expiring_in(3, 5));

    let suggestions = engine().generate(&snapshot, fixed_now());

    let ids: Vec<&str> = suggestions
        .iter()
        .map(|suggestion| suggestion.id.as_str())
        .collect();
    assert_eq!(ids, vec!["passport-1", "national-id-2", "driving-license-3"]);
}

#[test]
fn generation_is_idempotent_for_a_pinned_instant() {
    let snapshot = busy_snapshot();
    let first = engine().generate(&snapshot, fixed_now());
    let second = engine().generate(&snapshot, fixed_now());
    assert_eq!(first, second);
}

#[test]
fn analysis_report_captures_scoring_trail() {
    let report = engine().generate_with_analysis(&busy_snapshot(), fixed_now());

    assert_eq!(report.evaluated_at, fixed_now());
    assert_eq!(report.total_suggestions, report.suggestions.len());
    assert_eq!(report.total_suggestions, 5);

    // Only the national ID is on file; analysis covers every scored document.
    assert_eq!(report.documents_analyzed.len(), 1);
    let analysis = &report.documents_analyzed[0];
    assert_eq!(analysis.document_type, "National ID");
    assert_eq!(analysis.days_to_expiry, 40);
    assert_eq!(analysis.score, 3);
    assert!(analysis.should_notify);
    assert!(!analysis.has_late_renewal_before);
    assert_eq!(analysis.threshold, 3);

    assert_eq!(report.by_priority.high, 1);
    assert_eq!(report.by_priority.medium, 3);
    assert_eq!(report.by_priority.low, 1);
    assert_eq!(report.by_type.get("document"), Some(&1));
    assert_eq!(report.by_type.get("violation"), Some(&1));
    assert_eq!(report.rules_applied.len(), 7);
}

#[test]
fn analysis_records_documents_below_threshold() {
    let mut snapshot = empty_snapshot();
    snapshot.passport = Some(document_expiring_in(1, 40));

    let report = engine().generate_with_analysis(&snapshot, fixed_now());

    assert!(report.suggestions.is_empty());
    assert_eq!(report.documents_analyzed.len(), 1);
    assert!(!report.documents_analyzed[0].should_notify);
    assert_eq!(report.documents_analyzed[0].score, 2);
}

#[test]
fn custom_thresholds_change_rule_windows() {
    let config = crate::suggestions::engine::EngineConfig {
        violation_discount_hours: 8,
        ..Default::default()
    };
    let engine = crate::suggestions::engine::SuggestionEngine::new(config);

    let mut snapshot = empty_snapshot();
    snapshot.violations.push(unpaid_violation(10, 10));

    assert!(engine.generate(&snapshot, fixed_now()).is_empty());
}
