//! Signature engine for campus credentials.
//!
//! Signatures are computed as
//! `base64url(sha256(domain_separator || event_id || campus_id || issued_at))`
//! truncated to [`SIGNATURE_LEN`] characters. Integers are hashed big-endian.
//! This is tamper evidence for casual edits, not a cryptographic signature.

use crate::campus::CampusId;
use crate::payload::{CredentialPayload, EventId};
use base64::Engine;
use sha2::{Digest as Sha2Digest, Sha256};

/// Domain separator for signatures: `b"campuspass:signature:v1\0"`.
const SIGNATURE_DOMAIN_SEPARATOR: &[u8] = b"campuspass:signature:v1\0";

/// Domain separator for derived event identifiers: `b"campuspass:event-id:v1\0"`.
const EVENT_ID_DOMAIN_SEPARATOR: &[u8] = b"campuspass:event-id:v1\0";

/// Length of a signature string.
pub const SIGNATURE_LEN: usize = 16;

/// Signature carried by synthesized legacy payloads.
pub const LEGACY_SIGNATURE: &str = "legacy";

/// Derived event identifiers fall in `1..=DERIVED_EVENT_ID_SPACE`.
const DERIVED_EVENT_ID_SPACE: u64 = 1_000_000;

/// Computes the signature for an event/campus pairing at a fixed issuance time.
///
/// # Example
///
/// ```rust
/// use campuspass_canonical::{sign, SIGNATURE_LEN};
///
/// let sig = sign(7, 1, 1_760_000_000_000);
/// assert_eq!(sig.len(), SIGNATURE_LEN);
/// assert_eq!(sig, sign(7, 1, 1_760_000_000_000));
/// ```
pub fn sign(event_id: EventId, campus_id: CampusId, issued_at: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(SIGNATURE_DOMAIN_SEPARATOR);
    hasher.update(event_id.to_be_bytes());
    hasher.update(campus_id.to_be_bytes());
    hasher.update(issued_at.to_be_bytes());
    let hash_bytes = hasher.finalize();

    let mut b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes);
    b64.truncate(SIGNATURE_LEN);
    b64
}

/// Verifies a payload's signature against its own fields.
///
/// Payloads with an empty signature or the legacy sentinel pass automatically.
/// A signed payload without a readable issuance time cannot be verified.
pub fn verify(payload: &CredentialPayload) -> bool {
    if payload.signature.is_empty() || payload.signature == LEGACY_SIGNATURE {
        return true;
    }
    match payload.issued_at {
        Some(issued_at) => {
            sign(payload.event_id, payload.campus_id, issued_at) == payload.signature
        }
        None => false,
    }
}

/// Derives a small positive event identifier from a code string.
///
/// Formula: `u64_be(sha256(domain_separator || code)[..8]) % 1_000_000 + 1`.
/// The mapping is lossy and may collide across events.
pub fn derive_event_id(code: &str) -> EventId {
    let mut hasher = Sha256::new();
    hasher.update(EVENT_ID_DOMAIN_SEPARATOR);
    hasher.update(code.as_bytes());
    let hash_bytes = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash_bytes[..8]);
    u64::from_be_bytes(prefix) % DERIVED_EVENT_ID_SPACE + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PayloadVersion;

    fn signed_payload() -> CredentialPayload {
        CredentialPayload {
            event_id: 7,
            campus_id: 1,
            campus_code: "SNSU".into(),
            issued_at: Some(1_760_000_000_000),
            signature: sign(7, 1, 1_760_000_000_000),
            version: PayloadVersion::CampusAware,
        }
    }

    #[test]
    fn verify_accepts_matching_signature() {
        assert!(verify(&signed_payload()));
    }

    #[test]
    fn verify_rejects_altered_fields() {
        let mut payload = signed_payload();
        payload.campus_id = 2;
        assert!(!verify(&payload));

        let mut payload = signed_payload();
        payload.issued_at = Some(1_760_000_000_001);
        assert!(!verify(&payload));

        let mut payload = signed_payload();
        payload.issued_at = None;
        assert!(!verify(&payload));
    }

    #[test]
    fn escape_hatch_for_unsigned_payloads() {
        let mut payload = signed_payload();
        payload.signature = String::new();
        payload.event_id = 999;
        assert!(verify(&payload));

        payload.signature = LEGACY_SIGNATURE.to_string();
        assert!(verify(&payload));
    }

    #[test]
    fn derived_event_id_is_stable_and_bounded() {
        let id = derive_event_id("QR_OLDEVENT_1700000000000");
        assert_eq!(id, derive_event_id("QR_OLDEVENT_1700000000000"));
        assert!((1..=DERIVED_EVENT_ID_SPACE).contains(&id));
    }
}
