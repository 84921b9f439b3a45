//! Inspect command implementation.

use crate::error::CliError;
use crate::output::{format_json, format_timestamp};
use campuspass_core::{classify, envelope::is_envelope, parse, CodeFormat};
use serde_json::json;

pub fn run(code: String) -> Result<(), CliError> {
    let code = code.trim();
    let format = classify(code);

    let output = match format {
        CodeFormat::Legacy => json!({
            "code": code,
            "format": format,
            "boundCampusId": campuspass_canonical::HOME_CAMPUS_ID,
            "derivedEventId": campuspass_canonical::derive_event_id(code),
        }),
        CodeFormat::CampusAware => {
            let payload = parse(code);
            json!({
                "code": code,
                "format": format,
                "envelope": is_envelope(code),
                "wellFormed": payload.is_some(),
                "issuedAt": payload.as_ref().map(|p| format_timestamp(p.issued_at)),
                "payload": payload,
            })
        }
    };

    println!("{}", format_json(&output)?);
    Ok(())
}
