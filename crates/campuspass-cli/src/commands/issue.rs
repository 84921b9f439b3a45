//! Issue command implementation.

use crate::error::CliError;
use crate::output::{format_json, format_timestamp};
use campuspass_canonical::Campus;
use campuspass_core::{CampusContext, CredentialIssuer, EventRef, Role};

pub fn run(
    event_id: u64,
    title: String,
    campus_code: String,
    multi_campus: bool,
    json_output: bool,
) -> Result<(), CliError> {
    let campus =
        Campus::known_by_code(&campus_code).ok_or_else(|| CliError::UnknownCampus(campus_code))?;

    let mut event = EventRef::new(event_id, campus.id, title);
    if multi_campus {
        event = event.multi_campus();
    }
    let ctx = CampusContext::for_user(campus, Role::Organizer, &[]);

    let issued = CredentialIssuer::new().issue(&event, &ctx)?;

    if json_output {
        println!("{}", format_json(&issued)?);
    } else {
        println!("{}", issued.display_text);
        println!();
        println!("CODE       {}", issued.code);
        println!("ENVELOPE   {}", issued.envelope);
        println!("ISSUED_AT  {}", format_timestamp(issued.payload.issued_at));
        println!("SIGNATURE  {}", issued.payload.signature);
        if issued.is_multi_campus {
            println!("MULTI_CAMPUS yes");
        }
    }

    Ok(())
}
