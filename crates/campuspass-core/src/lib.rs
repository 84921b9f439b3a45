//! Issuance and validation of campus-scoped event check-in credentials.
//!
//! This crate provides:
//! - Credential issuance producing a display code and a tagged envelope
//! - Legacy detection and payload parsing for scanned codes
//! - Expiry, campus-access, and signature checks
//! - One ordered validation pipeline returning Accepted or Rejected
//!
//! Core invariants:
//! - Every operation is a pure function of its inputs and the supplied clock
//! - Malformed or disallowed codes are rejections, never errors
//! - Payloads are never mutated after they are produced
//!
#![deny(missing_docs)]

/// Campus access authorization.
pub mod access;
/// Attendance drafts derived from accepted credentials.
pub mod attendance;
/// Time sources.
pub mod clock;
/// Validator configuration.
pub mod config;
/// Caller context: campus, permissions, and expected event.
pub mod context;
/// Tagged envelope encoding of credential payloads.
pub mod envelope;
/// Error types for core operations.
pub mod errors;
/// Freshness window checks.
pub mod expiry;
/// Credential issuance.
pub mod issuer;
/// Legacy code detection.
pub mod legacy;
/// Display code parsing.
pub mod parser;
/// Validation pipeline and result types.
pub mod verification;

pub use access::{check_access, AccessDenied, AccessGrant};
pub use attendance::{AttendanceDraft, VerificationMethod};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ValidatorConfig;
pub use context::{CampusContext, CampusPermissions, EventRef, Role};
pub use errors::{CoreError, IssueError};
pub use expiry::{ExpiryCheck, ExpiryValidator, ExpiryVerdict};
pub use issuer::{CredentialIssuer, IssuedCredential};
pub use legacy::{classify, CodeFormat};
pub use parser::parse;
pub use verification::{
    Acceptance, CredentialValidator, ErrorCode, Rejection, ValidationReport, ValidationResult,
};
