//! Tagged envelope encoding: `CP2.<base64url(json payload)>`.
//!
//! Unlike display codes, an envelope carries the complete payload, so the
//! event id survives and the signature can be checked.

use crate::errors::CoreError;
use base64::Engine;
use campuspass_canonical::{
    campus_id_for_code, CredentialPayload, PayloadVersion, LEGACY_SIGNATURE,
};

/// Prefix identifying an envelope.
pub const ENVELOPE_PREFIX: &str = "CP2.";

/// Encodes a payload as an envelope string.
pub fn encode_envelope(payload: &CredentialPayload) -> Result<String, CoreError> {
    let json = serde_json::to_vec(payload)?;
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json);
    Ok(format!("{ENVELOPE_PREFIX}{b64}"))
}

/// Returns true when `code` carries the envelope prefix.
pub fn is_envelope(code: &str) -> bool {
    code.starts_with(ENVELOPE_PREFIX)
}

/// Decodes an envelope.
///
/// Returns `None` when the body is not valid base64url JSON, the version is not
/// campus-aware, the signature is missing, or the campus id disagrees with the
/// campus code.
pub fn decode_envelope(code: &str) -> Option<CredentialPayload> {
    let body = code.strip_prefix(ENVELOPE_PREFIX)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(body)
        .ok()?;
    let payload: CredentialPayload = serde_json::from_slice(&bytes).ok()?;

    if payload.version != PayloadVersion::CampusAware {
        return None;
    }
    if payload.signature.is_empty() || payload.signature == LEGACY_SIGNATURE {
        return None;
    }
    if campus_id_for_code(&payload.campus_code) != payload.campus_id {
        return None;
    }
    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuspass_canonical::sign;

    fn payload() -> CredentialPayload {
        CredentialPayload {
            event_id: 7,
            campus_id: 2,
            campus_code: "MALIMONO".into(),
            issued_at: Some(1_760_000_000_000),
            signature: sign(7, 2, 1_760_000_000_000),
            version: PayloadVersion::CampusAware,
        }
    }

    #[test]
    fn envelope_preserves_event_id() {
        let code = encode_envelope(&payload()).unwrap();
        assert!(is_envelope(&code));
        assert_eq!(decode_envelope(&code), Some(payload()));
    }

    #[test]
    fn inconsistent_campus_is_rejected() {
        let mut tampered = payload();
        tampered.campus_id = 1;
        let code = encode_envelope(&tampered).unwrap();
        assert_eq!(decode_envelope(&code), None);
    }

    #[test]
    fn legacy_version_is_rejected() {
        let mut legacy = payload();
        legacy.version = PayloadVersion::Legacy;
        let code = encode_envelope(&legacy).unwrap();
        assert_eq!(decode_envelope(&code), None);
    }

    #[test]
    fn unsigned_envelope_is_rejected() {
        let mut unsigned = payload();
        unsigned.signature = String::new();
        assert_eq!(decode_envelope(&encode_envelope(&unsigned).unwrap()), None);

        unsigned.signature = LEGACY_SIGNATURE.to_string();
        assert_eq!(decode_envelope(&encode_envelope(&unsigned).unwrap()), None);
    }

    #[test]
    fn garbage_body_is_rejected() {
        assert_eq!(decode_envelope("CP2.!!!"), None);
        assert_eq!(decode_envelope("CP2.e30"), None);
        assert_eq!(decode_envelope("SNSU_FAIR_1"), None);
    }
}
