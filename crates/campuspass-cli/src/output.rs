//! Output formatting utilities.

use campuspass_canonical::CredentialPayload;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Formats epoch milliseconds as RFC3339, or `?` when unreadable.
pub fn format_timestamp(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| "?".to_string())
}

/// Formats a payload as a simple table row.
pub fn format_payload_row(payload: &CredentialPayload) -> String {
    format!(
        "{:<10} {:<8} {:<10} {:<26} {}",
        truncate(&payload.campus_code, 10),
        payload.campus_id,
        payload.event_id,
        format_timestamp(payload.issued_at),
        payload.version
    )
}

/// Prints the payload table header.
#[allow(clippy::print_literal)]
pub fn print_payload_header() {
    println!(
        "{:<10} {:<8} {:<10} {:<26} {}",
        "CAMPUS", "CAMPUS_ID", "EVENT_ID", "ISSUED_AT", "VERSION"
    );
    println!("{}", "-".repeat(66));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_in_utc() {
        assert_eq!(
            format_timestamp(Some(1_700_000_000_000)),
            "2023-11-14T22:13:20.000Z"
        );
        assert_eq!(format_timestamp(None), "?");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("DELCARMEN", 10), "DELCARMEN");
        assert_eq!(truncate("ÉÉÉÉÉÉÉÉÉÉÉÉ", 5), "ÉÉ...");
    }
}
