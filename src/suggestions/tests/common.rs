use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::suggestions::domain::{
    AppointmentRecord, AppointmentStatus, DelegationRecord, DelegationStatus, DocumentRecord,
    HajjRecord, HajjRegistrationStatus, UserRecordSnapshot, ViolationRecord, ViolationStatus,
};
use crate::suggestions::engine::{EngineConfig, SuggestionEngine};

/// Fixed evaluation instant: noon UTC, January 15th, inside the Hajj season.
pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Evaluation instant outside the Hajj season (August 15th).
pub(super) fn off_season_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> SuggestionEngine {
    SuggestionEngine::new(EngineConfig::default())
}

/// Document whose ceiling-rounded days-to-expiry from `fixed_now` equals `days`.
///
/// `fixed_now` sits at noon, so midnight of `date + days` is `days - 0.5` days
/// away and the ceiling lands exactly on `days`.
pub(super) fn document_expiring_in(id: u32, days: i64) -> DocumentRecord {
    DocumentRecord {
        id,
        number: format!("X{id:09}"),
        expiry_date: (fixed_now() + Duration::days(days)).date_naive(),
        issue_date: (fixed_now() - Duration::days(1_000)).date_naive(),
        status: "active".to_string(),
    }
}

pub(super) fn unpaid_violation(id: u32, discount_hours: i64) -> ViolationRecord {
    ViolationRecord {
        id,
        violation_type: "Speeding".to_string(),
        amount: 300,
        status: ViolationStatus::Unpaid,
        discount_expiry: Some(fixed_now() + Duration::hours(discount_hours)),
    }
}

pub(super) fn paid_violation(id: u32) -> ViolationRecord {
    ViolationRecord {
        id,
        violation_type: "Illegal Parking".to_string(),
        amount: 100,
        status: ViolationStatus::Paid,
        discount_expiry: Some(fixed_now() + Duration::hours(10)),
    }
}

pub(super) fn appointment_in(id: u32, hours: i64, status: AppointmentStatus) -> AppointmentRecord {
    AppointmentRecord {
        id,
        appointment_type: "Passport Renewal".to_string(),
        appointment_date: fixed_now() + Duration::hours(hours),
        location: "Riyadh".to_string(),
        status,
    }
}

pub(super) fn delegation_expiring_in(
    id: u32,
    days: i64,
    status: DelegationStatus,
) -> DelegationRecord {
    DelegationRecord {
        id,
        delegation_type: "Vehicle".to_string(),
        delegate_name: "Omar Al-Harbi".to_string(),
        expiry_date: (fixed_now() + Duration::days(days)).date_naive(),
        status,
    }
}

pub(super) fn hajj_record(eligible: bool, status: HajjRegistrationStatus) -> HajjRecord {
    HajjRecord {
        id: 900,
        eligible,
        registration_status: status,
        last_hajj_year: None,
    }
}

pub(super) fn empty_snapshot() -> UserRecordSnapshot {
    UserRecordSnapshot::default()
}
