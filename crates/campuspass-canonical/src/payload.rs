use crate::campus::CampusId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event identifier carried by a credential.
///
/// For display and legacy codes this is derived from the code text and is not a
/// reliable foreign key; see [`crate::derive_event_id`].
pub type EventId = u64;

/// Credential format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadVersion {
    /// Pre-campus codes, bound to the home campus with relaxed checks.
    #[serde(rename = "1.0")]
    Legacy,
    /// Campus-aware codes with strict access, expiry, and signature checks.
    #[serde(rename = "2.0")]
    CampusAware,
}

impl PayloadVersion {
    /// Wire tag for this version.
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadVersion::Legacy => "1.0",
            PayloadVersion::CampusAware => "2.0",
        }
    }

    /// Whether campus access and signature rules apply strictly.
    pub fn is_strict(self) -> bool {
        matches!(self, PayloadVersion::CampusAware)
    }
}

impl fmt::Display for PayloadVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured credential data recovered from a code.
///
/// Payloads are produced once (by issuance or parsing) and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialPayload {
    /// Event the credential admits to (possibly derived).
    pub event_id: EventId,
    /// Campus the credential belongs to.
    pub campus_id: CampusId,
    /// Campus code as it appeared in the code.
    pub campus_code: String,
    /// Issuance time in epoch milliseconds; `None` when the code's timestamp is unreadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
    /// Tamper-evidence token; empty or the legacy sentinel skips verification.
    #[serde(default)]
    pub signature: String,
    /// Format version.
    pub version: PayloadVersion,
}

impl CredentialPayload {
    /// Returns true for pre-campus payloads.
    pub fn is_legacy(&self) -> bool {
        self.version == PayloadVersion::Legacy
    }
}
