//! Canonical primitives for campus-scoped check-in credentials.
//!
//! Every field that participates in signing, hashing, or campus resolution
//! lives in this crate: the closed campus registry, identifier newtypes, the
//! credential payload, and the signature engine.
//!
#![deny(missing_docs)]

/// Closed registry of known campuses.
pub mod campus;
/// Validated identifier newtypes.
pub mod identifiers;
/// Credential payload and version tags.
pub mod payload;
/// Signature engine and derived event identifiers.
pub mod signature;
/// Event title slugging for display codes.
pub mod slug;
/// Validation errors for canonical primitives.
pub mod validation;

pub use campus::{
    campus_id_for_code, is_known_code, lookup_code, lookup_id, Campus, CampusId, KnownCampus,
    HOME_CAMPUS_ID, KNOWN_CAMPUSES,
};
pub use identifiers::{CampusCode, EventSlug};
pub use payload::{CredentialPayload, EventId, PayloadVersion};
pub use signature::{derive_event_id, sign, verify, LEGACY_SIGNATURE, SIGNATURE_LEN};
pub use slug::title_slug;
pub use validation::ValidationError;
