use crate::verification::Acceptance;
use campuspass_canonical::{CampusId, EventId};
use serde::{Deserialize, Serialize};

/// How an attendance record was verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    /// Scanned check-in credential.
    QrCode,
    /// Entered by staff.
    Manual,
    /// Recorded by an administrator override.
    AdminOverride,
}

/// Attendance record derived from an accepted scan, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDraft {
    /// Event attended (derived for display and legacy codes).
    pub event_id: EventId,
    /// Campus the credential belongs to.
    pub campus_id: CampusId,
    /// The attendee checked in at another campus's event.
    pub cross_campus_attendance: bool,
    /// The scan used a legacy code.
    pub is_legacy: bool,
    /// Always [`VerificationMethod::QrCode`] for scans.
    pub verification_method: VerificationMethod,
    /// When attendance was marked, epoch milliseconds.
    pub marked_at: i64,
}

impl AttendanceDraft {
    pub(crate) fn from_acceptance(acceptance: &Acceptance, marked_at: i64) -> Self {
        Self {
            event_id: acceptance.payload.event_id,
            campus_id: acceptance.payload.campus_id,
            cross_campus_attendance: acceptance.cross_campus_access,
            is_legacy: acceptance.is_legacy,
            verification_method: VerificationMethod::QrCode,
            marked_at,
        }
    }
}
