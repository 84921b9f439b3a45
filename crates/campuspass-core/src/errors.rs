use thiserror::Error;

/// Internal faults raised inside the validation pipeline.
///
/// These never reach callers of [`crate::CredentialValidator::validate`]; they are
/// reported there as `VALIDATION_ERROR` rejections.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Credential age could not be computed without overflow.
    #[error("timestamp arithmetic overflow (now {now}, issued at {issued_at})")]
    TimestampOverflow {
        /// Current time in epoch milliseconds.
        now: i64,
        /// Issuance time in epoch milliseconds.
        issued_at: i64,
    },
    /// Envelope serialization failed.
    #[error("envelope encoding failed: {0}")]
    Envelope(#[from] serde_json::Error),
}

/// Issuance misuse: the caller supplied an incomplete event or campus.
#[derive(Error, Debug)]
pub enum IssueError {
    /// Event identifier is missing (zero).
    #[error("event id is required")]
    MissingEventId,
    /// Event title is missing or has no printable characters.
    #[error("event title is required")]
    MissingEventTitle,
    /// Campus identifier is missing (zero).
    #[error("campus id is required")]
    MissingCampusId,
    /// Campus code is missing or malformed.
    #[error("invalid campus code: {0}")]
    InvalidCampusCode(#[from] campuspass_canonical::ValidationError),
    /// Campus id and code do not match the registry.
    #[error("campus {code} (id {id}) is not a registered campus")]
    UnregisteredCampus {
        /// Supplied campus id.
        id: u32,
        /// Supplied campus code.
        code: String,
    },
    /// Envelope encoding failed.
    #[error("credential encoding failed: {0}")]
    Encoding(#[from] CoreError),
}
