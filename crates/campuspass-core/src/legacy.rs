use campuspass_canonical::{
    derive_event_id, is_known_code, CredentialPayload, PayloadVersion, HOME_CAMPUS_ID,
    LEGACY_SIGNATURE,
};
use serde::{Deserialize, Serialize};

/// Separator between code segments.
pub const SEPARATOR: char = '_';

/// Prefix used by codes issued before campus awareness existed.
pub const LEGACY_PREFIX: &str = "QR_";

/// Campus code recorded on synthesized legacy payloads.
pub const LEGACY_CAMPUS_CODE: &str = "home";

/// Shape of a scanned code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeFormat {
    /// `QR_<SLUG>_<millis>`, bound to the home campus.
    Legacy,
    /// Campus-aware display code or tagged envelope.
    CampusAware,
}

/// Classifies a code as legacy or campus-aware.
///
/// A code is legacy when it starts with [`LEGACY_PREFIX`] and none of its
/// later segments is a registered campus code.
pub fn classify(code: &str) -> CodeFormat {
    let Some(rest) = code.strip_prefix(LEGACY_PREFIX) else {
        return CodeFormat::CampusAware;
    };
    if rest.split(SEPARATOR).any(is_known_code) {
        CodeFormat::CampusAware
    } else {
        CodeFormat::Legacy
    }
}

/// Synthesizes the payload for a legacy code.
///
/// Legacy codes carry no campus and no trustworthy timestamp, so the payload is
/// bound to the home campus, stamped with `now`, and signed with the sentinel.
pub fn legacy_payload(code: &str, now_millis: i64) -> CredentialPayload {
    CredentialPayload {
        event_id: derive_event_id(code),
        campus_id: HOME_CAMPUS_ID,
        campus_code: LEGACY_CAMPUS_CODE.to_string(),
        issued_at: Some(now_millis),
        signature: LEGACY_SIGNATURE.to_string(),
        version: PayloadVersion::Legacy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_legacy_code() {
        assert_eq!(classify("QR_OLDEVENT_1700000000000"), CodeFormat::Legacy);
        assert_eq!(classify("QR_"), CodeFormat::Legacy);
    }

    #[test]
    fn campus_marker_wins_over_prefix() {
        assert_eq!(classify("QR_SNSU_FAIR_1700000000000"), CodeFormat::CampusAware);
        assert_eq!(classify("QR_FAIR_MAINIT"), CodeFormat::CampusAware);
    }

    #[test]
    fn marker_must_be_a_whole_segment() {
        assert_eq!(classify("QR_SNSUX_1700000000000"), CodeFormat::Legacy);
    }

    #[test]
    fn other_prefixes_are_campus_aware() {
        assert_eq!(classify("SNSU_FAIR_1"), CodeFormat::CampusAware);
        assert_eq!(classify("qr_fair_1"), CodeFormat::CampusAware);
        assert_eq!(classify("garbage"), CodeFormat::CampusAware);
    }

    #[test]
    fn legacy_payload_is_home_bound() {
        let payload = legacy_payload("QR_OLDEVENT_1700000000000", 42);
        assert_eq!(payload.campus_id, HOME_CAMPUS_ID);
        assert_eq!(payload.issued_at, Some(42));
        assert!(payload.is_legacy());
        assert!(campuspass_canonical::verify(&payload));
    }
}
