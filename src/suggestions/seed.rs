use chrono::{DateTime, Duration, Utc};

use super::domain::{
    AppointmentRecord, AppointmentStatus, DelegationRecord, DelegationStatus, DocumentRecord,
    HajjRecord, HajjRegistrationStatus, UserId, UserRecordSnapshot, ViolationRecord,
    ViolationStatus,
};
use super::repository::InMemorySnapshotStore;

const DEMO_USER_COUNT: u32 = 12;

const VIOLATION_TYPES: [&str; 4] = [
    "Speeding",
    "Running Red Light",
    "Illegal Parking",
    "Using Phone While Driving",
];

const APPOINTMENT_TYPES: [&str; 3] = [
    "Passport Renewal",
    "ID Card Replacement",
    "Document Verification",
];

const DELEGATION_TYPES: [&str; 3] = ["Vehicle", "Financial", "Legal"];

const LOCATIONS: [&str; 4] = ["Riyadh", "Jeddah", "Dammam", "Tabuk"];

/// Build the deterministic demo store: a spread of users whose records land on
/// both sides of every rule window, anchored to the supplied `now` so demos
/// stay interesting regardless of the date they run.
pub fn demo_store(now: DateTime<Utc>) -> InMemorySnapshotStore {
    let mut store = InMemorySnapshotStore::new();
    for index in 1..=DEMO_USER_COUNT {
        store.insert(UserId(index), demo_snapshot(index, now));
    }
    store
}

fn document(id: u32, prefix: char, index: u32, now: DateTime<Utc>, days: i64) -> DocumentRecord {
    DocumentRecord {
        id,
        number: format!("{prefix}{:09}", 100_000_000 + u64::from(index) * 101),
        expiry_date: (now + Duration::days(days)).date_naive(),
        issue_date: (now - Duration::days(3 * 365)).date_naive(),
        status: if days <= 30 { "expiring_soon" } else { "active" }.to_string(),
    }
}

fn demo_snapshot(index: u32, now: DateTime<Utc>) -> UserRecordSnapshot {
    let spread = i64::from(index);
    let mut snapshot = UserRecordSnapshot::default();

    // User 3 carries no records at all, mirroring a fresh account.
    if index == 3 {
        return snapshot;
    }

    snapshot.passport = Some(document(index * 10 + 1, 'P', index, now, spread * 37 % 365 + 1));
    snapshot.national_id = Some(document(index * 10 + 2, 'N', index, now, spread * 53 % 700 + 20));
    if index % 2 == 0 {
        snapshot.driving_license =
            Some(document(index * 10 + 3, 'D', index, now, spread * 29 % 365 + 1));
    }

    if index % 2 == 1 {
        snapshot.violations.push(ViolationRecord {
            id: index * 10 + 4,
            violation_type: VIOLATION_TYPES[(index as usize) % VIOLATION_TYPES.len()].to_string(),
            amount: 150 + index * 50,
            status: ViolationStatus::Unpaid,
            discount_expiry: Some(now + Duration::hours(spread * 11 % 96 + 1)),
        });
        snapshot.violations.push(ViolationRecord {
            id: index * 10 + 5,
            violation_type: "Expired Registration".to_string(),
            amount: 100,
            status: ViolationStatus::Paid,
            discount_expiry: None,
        });
    }

    if index % 3 == 0 {
        snapshot.appointments.push(AppointmentRecord {
            id: index * 10 + 6,
            appointment_type: APPOINTMENT_TYPES[(index as usize) % APPOINTMENT_TYPES.len()]
                .to_string(),
            appointment_date: now + Duration::hours(spread * 7 % 48 + 1),
            location: LOCATIONS[(index as usize) % LOCATIONS.len()].to_string(),
            status: AppointmentStatus::Scheduled,
        });
    }

    if index % 4 == 0 {
        snapshot.delegations.push(DelegationRecord {
            id: index * 10 + 7,
            delegation_type: DELEGATION_TYPES[(index as usize) % DELEGATION_TYPES.len()]
                .to_string(),
            delegate_name: "Khalid Al-Otaibi".to_string(),
            expiry_date: (now + Duration::days(spread % 10 + 1)).date_naive(),
            status: DelegationStatus::Active,
        });
    }

    if index % 3 == 1 {
        snapshot.hajj = Some(HajjRecord {
            id: index * 10 + 8,
            eligible: true,
            registration_status: HajjRegistrationStatus::NotRegistered,
            last_hajj_year: None,
        });
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::repository::SnapshotRepository;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn demo_store_is_deterministic() {
        let now = fixed_now();
        let first = demo_store(now);
        let second = demo_store(now);
        for user in first.users().expect("users listed") {
            assert_eq!(
                first.fetch(user).expect("fetches"),
                second.fetch(user).expect("fetches"),
                "snapshot for {user} diverged"
            );
        }
    }

    #[test]
    fn demo_store_seeds_expected_population() {
        let store = demo_store(fixed_now());
        assert_eq!(store.len(), DEMO_USER_COUNT as usize);

        let empty = store
            .fetch(UserId(3))
            .expect("fetches")
            .expect("user 3 exists");
        assert_eq!(empty, UserRecordSnapshot::default());
    }

    #[test]
    fn seeded_violations_stay_unpaid_with_discount_windows() {
        let store = demo_store(fixed_now());
        let snapshot = store
            .fetch(UserId(1))
            .expect("fetches")
            .expect("user 1 exists");
        let unpaid: Vec<_> = snapshot
            .violations
            .iter()
            .filter(|violation| violation.status == ViolationStatus::Unpaid)
            .collect();
        assert_eq!(unpaid.len(), 1);
        assert!(unpaid[0].discount_expiry.is_some());
    }
}
