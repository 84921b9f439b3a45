use crate::access::check_access;
use crate::attendance::AttendanceDraft;
use crate::clock::{Clock, SystemClock};
use crate::config::ValidatorConfig;
use crate::context::{CampusContext, EventRef};
use crate::errors::CoreError;
use crate::expiry::{ExpiryValidator, ExpiryVerdict};
use crate::legacy::{classify, legacy_payload, CodeFormat};
use crate::parser::parse;
use campuspass_canonical::{verify, CredentialPayload, HOME_CAMPUS_ID};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, info};

/// Stable rejection codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Code could not be parsed.
    InvalidFormat,
    /// Legacy code scanned outside the home campus.
    LegacyCampusMismatch,
    /// Caller may not validate credentials from the code's campus.
    CampusAccessDenied,
    /// Credential is older than the freshness window or its time is unreadable.
    QrExpired,
    /// Credential is dated further in the future than allowed.
    QrNotYetValid,
    /// Signature does not match the payload.
    InvalidSignature,
    /// Credential is for a different event than expected.
    EventMismatch,
    /// Credential campus differs from the expected event's campus.
    CampusEventMismatch,
    /// An expected event is required but none was supplied.
    EventRefRequired,
    /// Unexpected internal fault.
    ValidationError,
}

impl ErrorCode {
    /// Wire form of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::LegacyCampusMismatch => "LEGACY_CAMPUS_MISMATCH",
            ErrorCode::CampusAccessDenied => "CAMPUS_ACCESS_DENIED",
            ErrorCode::QrExpired => "QR_EXPIRED",
            ErrorCode::QrNotYetValid => "QR_NOT_YET_VALID",
            ErrorCode::InvalidSignature => "INVALID_SIGNATURE",
            ErrorCode::EventMismatch => "EVENT_MISMATCH",
            ErrorCode::CampusEventMismatch => "CAMPUS_EVENT_MISMATCH",
            ErrorCode::EventRefRequired => "EVENT_REF_REQUIRED",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accepted credential and the access flags collected on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acceptance {
    /// Payload that passed every check.
    pub payload: CredentialPayload,
    /// The code was in the legacy format.
    pub is_legacy: bool,
    /// The credential campus equals the caller's campus.
    pub campus_matched: bool,
    /// Access was granted across campuses.
    pub cross_campus_access: bool,
}

impl Acceptance {
    /// The attendance record a storage layer would persist for this scan.
    pub fn attendance(&self, marked_at: i64) -> AttendanceDraft {
        AttendanceDraft::from_acceptance(self, marked_at)
    }
}

/// A rejected credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Stable rejection code.
    pub error_code: ErrorCode,
    /// Diagnostic message.
    pub message: String,
}

/// Terminal outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ValidationReport")]
pub enum ValidationResult {
    /// Every check passed.
    Accepted(Acceptance),
    /// A check failed.
    Rejected(Rejection),
}

impl ValidationResult {
    fn rejected(error_code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        debug!(error_code = %error_code, reason = %message, "credential rejected");
        ValidationResult::Rejected(Rejection {
            error_code,
            message,
        })
    }

    /// True for accepted credentials.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    /// Rejection code, if rejected.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected(rejection) => Some(rejection.error_code),
        }
    }

    /// Accepted payload, if accepted.
    pub fn payload(&self) -> Option<&CredentialPayload> {
        match self {
            ValidationResult::Accepted(acceptance) => Some(&acceptance.payload),
            ValidationResult::Rejected(_) => None,
        }
    }

    /// Acceptance details, if accepted.
    pub fn acceptance(&self) -> Option<&Acceptance> {
        match self {
            ValidationResult::Accepted(acceptance) => Some(acceptance),
            ValidationResult::Rejected(_) => None,
        }
    }

    /// Flat report shape for external consumers.
    pub fn report(&self) -> ValidationReport {
        ValidationReport::from(self.clone())
    }
}

/// Flat, serializable view of a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Whether the credential was accepted.
    pub is_valid: bool,
    /// Rejection code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    /// Rejection message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Accepted payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<CredentialPayload>,
    /// Legacy format flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_legacy: Option<bool>,
    /// Cross-campus access flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_campus_access: Option<bool>,
    /// Same-campus flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_matched: Option<bool>,
}

impl From<ValidationResult> for ValidationReport {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Accepted(acceptance) => ValidationReport {
                is_valid: true,
                error_code: None,
                message: None,
                payload: Some(acceptance.payload),
                is_legacy: Some(acceptance.is_legacy),
                cross_campus_access: Some(acceptance.cross_campus_access),
                campus_matched: Some(acceptance.campus_matched),
            },
            ValidationResult::Rejected(rejection) => ValidationReport {
                is_valid: false,
                error_code: Some(rejection.error_code),
                message: Some(rejection.message),
                payload: None,
                is_legacy: None,
                cross_campus_access: None,
                campus_matched: None,
            },
        }
    }
}

/// Validates scanned codes against the caller's campus context.
#[derive(Debug, Clone)]
pub struct CredentialValidator<C = SystemClock> {
    config: ValidatorConfig,
    expiry: ExpiryValidator,
    clock: C,
}

impl Default for CredentialValidator<SystemClock> {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl CredentialValidator<SystemClock> {
    /// Validator reading wall-clock time.
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> CredentialValidator<C> {
    /// Validator reading time from `clock`.
    pub fn with_clock(config: ValidatorConfig, clock: C) -> Self {
        let expiry = ExpiryValidator::from_config(&config);
        Self {
            config,
            expiry,
            clock,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates one scanned code.
    ///
    /// Surrounding whitespace is ignored. The result is always Accepted or
    /// Rejected; internal faults become `VALIDATION_ERROR`.
    pub fn validate(
        &self,
        code: &str,
        ctx: &CampusContext,
        expected_event: Option<&EventRef>,
    ) -> ValidationResult {
        self.validate_at(code, ctx, expected_event, self.clock.now_millis())
    }

    /// Validates one scanned code as of `now_millis`.
    pub fn validate_at(
        &self,
        code: &str,
        ctx: &CampusContext,
        expected_event: Option<&EventRef>,
        now_millis: i64,
    ) -> ValidationResult {
        let code = code.trim();
        let outcome = match classify(code) {
            CodeFormat::Legacy => Ok(validate_legacy(code, ctx, now_millis)),
            CodeFormat::CampusAware => self.validate_campus_aware(code, ctx, expected_event, now_millis),
        };
        match outcome {
            Ok(result) => result,
            Err(fault) => {
                error!(error = %fault, "credential validation fault");
                ValidationResult::rejected(ErrorCode::ValidationError, fault.to_string())
            }
        }
    }

    fn validate_campus_aware(
        &self,
        code: &str,
        ctx: &CampusContext,
        expected_event: Option<&EventRef>,
        now_millis: i64,
    ) -> Result<ValidationResult, CoreError> {
        let Some(payload) = parse(code) else {
            return Ok(ValidationResult::rejected(
                ErrorCode::InvalidFormat,
                "code is not a recognized credential format",
            ));
        };

        let grant = match check_access(&payload, ctx) {
            Ok(grant) => grant,
            Err(denied) => {
                return Ok(ValidationResult::rejected(
                    ErrorCode::CampusAccessDenied,
                    denied.to_string(),
                ))
            }
        };

        let expiry = self.expiry.check_age(payload.issued_at, now_millis)?;
        match expiry.verdict {
            ExpiryVerdict::Fresh => {}
            ExpiryVerdict::Expired => {
                let age = expiry.age_hours.unwrap_or_default();
                return Ok(ValidationResult::rejected(
                    ErrorCode::QrExpired,
                    format!(
                        "credential expired: issued {age:.1} hours ago, limit is {} hours",
                        self.config.max_age_hours
                    ),
                ));
            }
            ExpiryVerdict::Unreadable => {
                return Ok(ValidationResult::rejected(
                    ErrorCode::QrExpired,
                    "credential timestamp is unreadable",
                ));
            }
            ExpiryVerdict::NotYetValid => {
                let ahead = -expiry.age_hours.unwrap_or_default();
                return Ok(ValidationResult::rejected(
                    ErrorCode::QrNotYetValid,
                    format!("credential is dated {ahead:.2} hours in the future"),
                ));
            }
        }

        if !verify(&payload) {
            return Ok(ValidationResult::rejected(
                ErrorCode::InvalidSignature,
                "credential signature does not match its contents",
            ));
        }

        match expected_event {
            Some(event) => {
                if payload.event_id != event.id {
                    return Ok(ValidationResult::rejected(
                        ErrorCode::EventMismatch,
                        format!(
                            "credential is for event {} but event {} was expected",
                            payload.event_id, event.id
                        ),
                    ));
                }
                if payload.campus_id != event.campus_id {
                    return Ok(ValidationResult::rejected(
                        ErrorCode::CampusEventMismatch,
                        format!(
                            "credential campus {} does not host event {} (campus {})",
                            payload.campus_id, event.id, event.campus_id
                        ),
                    ));
                }
            }
            None if self.config.require_event_ref => {
                return Ok(ValidationResult::rejected(
                    ErrorCode::EventRefRequired,
                    "an expected event is required to validate this credential",
                ));
            }
            None => {}
        }

        if grant.cross_campus_access() {
            info!(
                campus = %payload.campus_code,
                caller_campus = %ctx.current_campus.code,
                grant = ?grant,
                "cross-campus credential accepted"
            );
        }
        Ok(ValidationResult::Accepted(Acceptance {
            payload,
            is_legacy: false,
            campus_matched: grant.campus_matched(),
            cross_campus_access: grant.cross_campus_access(),
        }))
    }
}

fn validate_legacy(code: &str, ctx: &CampusContext, now_millis: i64) -> ValidationResult {
    if ctx.current_campus.id != HOME_CAMPUS_ID {
        return ValidationResult::rejected(
            ErrorCode::LegacyCampusMismatch,
            format!(
                "legacy credentials are only valid at the home campus, caller is at {}",
                ctx.current_campus.code
            ),
        );
    }
    ValidationResult::Accepted(Acceptance {
        payload: legacy_payload(code, now_millis),
        is_legacy: true,
        campus_matched: true,
        cross_campus_access: false,
    })
}
