use crate::envelope::{decode_envelope, is_envelope};
use crate::legacy::SEPARATOR;
use campuspass_canonical::{campus_id_for_code, derive_event_id, CredentialPayload, PayloadVersion};

const MIN_SEGMENTS: usize = 3;

/// Parses a campus-aware code into a payload.
///
/// Envelopes are decoded in full. Display codes (`<CAMPUS>_<SLUG>_<millis>`)
/// yield a payload whose campus comes from the first segment, whose issuance
/// time comes from the last segment (`None` if not an integer), and whose event
/// id is derived from the whole code. Display codes carry no signature.
///
/// Returns `None` for structurally malformed input.
pub fn parse(code: &str) -> Option<CredentialPayload> {
    if is_envelope(code) {
        return decode_envelope(code);
    }

    let segments: Vec<&str> = code.split(SEPARATOR).collect();
    if segments.len() < MIN_SEGMENTS {
        return None;
    }
    let campus_code = segments[0];
    let issued_at = segments[segments.len() - 1].parse::<i64>().ok();

    Some(CredentialPayload {
        event_id: derive_event_id(code),
        campus_id: campus_id_for_code(campus_code),
        campus_code: campus_code.to_string(),
        issued_at,
        signature: String::new(),
        version: PayloadVersion::CampusAware,
    })
}
