//! Campuses command implementation.

use crate::error::CliError;
use crate::output::format_json;
use campuspass_canonical::KNOWN_CAMPUSES;
use serde_json::json;

pub fn run(json_output: bool) -> Result<(), CliError> {
    if json_output {
        let campuses: Vec<_> = KNOWN_CAMPUSES
            .iter()
            .map(|c| {
                json!({
                    "id": c.id,
                    "code": c.code,
                    "displayName": c.display_name,
                    "domain": c.domain,
                })
            })
            .collect();
        println!("{}", format_json(&campuses)?);
    } else {
        println!("{:<4} {:<10} {:<36} {}", "ID", "CODE", "NAME", "DOMAIN");
        println!("{}", "-".repeat(72));
        for c in KNOWN_CAMPUSES.iter() {
            println!("{:<4} {:<10} {:<36} {}", c.id, c.code, c.display_name, c.domain);
        }
    }
    Ok(())
}
