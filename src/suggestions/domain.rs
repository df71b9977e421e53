use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for portal users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three expiry-bearing identity documents handled by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Passport,
    NationalId,
    DrivingLicense,
}

impl DocumentKind {
    /// Fixed evaluation order within the document rule.
    pub fn ordered() -> [DocumentKind; 3] {
        [
            DocumentKind::Passport,
            DocumentKind::NationalId,
            DocumentKind::DrivingLicense,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Passport => "Passport",
            DocumentKind::NationalId => "National ID",
            DocumentKind::DrivingLicense => "Driving License",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::Passport => "passport",
            DocumentKind::NationalId => "national-id",
            DocumentKind::DrivingLicense => "driving-license",
        }
    }

    /// Renewal page the suggestion links to.
    pub fn action_url(&self) -> String {
        format!("/services/{}", self.slug())
    }
}

/// Common shape of passport, national ID, and driving license records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: u32,
    pub number: String,
    pub expiry_date: NaiveDate,
    pub issue_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationStatus {
    Unpaid,
    Paid,
}

/// Traffic violation with an optional early-payment discount window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub id: u32,
    pub violation_type: String,
    pub amount: u32,
    pub status: ViolationStatus,
    pub discount_expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: u32,
    pub appointment_type: String,
    pub appointment_date: DateTime<Utc>,
    pub location: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegationStatus {
    Active,
    Expired,
    Revoked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    pub id: u32,
    pub delegation_type: String,
    pub delegate_name: String,
    pub expiry_date: NaiveDate,
    pub status: DelegationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HajjRegistrationStatus {
    NotEligible,
    NotRegistered,
    Registered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HajjRecord {
    pub id: u32,
    pub eligible: bool,
    pub registration_status: HajjRegistrationStatus,
    pub last_hajj_year: Option<i32>,
}

/// Complete read-only view of one user's records at a single point in time.
///
/// The engine never mutates a snapshot; a fresh one is assembled per request
/// and dropped once the suggestion list has been produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecordSnapshot {
    pub passport: Option<DocumentRecord>,
    pub national_id: Option<DocumentRecord>,
    pub driving_license: Option<DocumentRecord>,
    pub violations: Vec<ViolationRecord>,
    pub appointments: Vec<AppointmentRecord>,
    pub delegations: Vec<DelegationRecord>,
    pub hajj: Option<HajjRecord>,
}

impl UserRecordSnapshot {
    pub fn document(&self, kind: DocumentKind) -> Option<&DocumentRecord> {
        match kind {
            DocumentKind::Passport => self.passport.as_ref(),
            DocumentKind::NationalId => self.national_id.as_ref(),
            DocumentKind::DrivingLicense => self.driving_license.as_ref(),
        }
    }
}

/// Domain a suggestion originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Document,
    Violation,
    Appointment,
    Delegation,
    Hajj,
}

impl SuggestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Document => "document",
            SuggestionKind::Violation => "violation",
            SuggestionKind::Appointment => "appointment",
            SuggestionKind::Delegation => "delegation",
            SuggestionKind::Hajj => "hajj",
        }
    }
}

/// Display priority for a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Explicit sort rank, decoupled from the serialized labels.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// One actionable notification surfaced to the user.
///
/// Field names follow the portal's established wire shape, so the frontend can
/// consume the list without translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub action_url: String,
    /// Human-readable remaining-time label, e.g. "5 days" or "12 hours".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    /// Identifier of the source record, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<u32>,
}
