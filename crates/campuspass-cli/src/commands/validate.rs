//! Validate command implementation.

use crate::error::{read_json, CliError};
use crate::output::{format_json, format_payload_row, print_payload_header};
use campuspass_canonical::{Campus, CampusId, EventId};
use campuspass_core::{
    CampusContext, CredentialValidator, EventRef, Role, ValidationResult, ValidatorConfig,
};
use tracing::debug;

pub struct Args {
    pub code: String,
    pub campus: String,
    pub role: Role,
    pub accessible: Vec<CampusId>,
    pub context: Option<String>,
    pub event: Option<String>,
    pub expected: Option<(EventId, CampusId)>,
    pub config: Option<String>,
    pub json: bool,
    pub strict: bool,
}

pub fn run(args: Args) -> Result<(), CliError> {
    let ctx = match &args.context {
        Some(path) => read_json::<CampusContext>(path)?,
        None => {
            let campus = Campus::known_by_code(&args.campus)
                .ok_or_else(|| CliError::UnknownCampus(args.campus.clone()))?;
            CampusContext::for_user(campus, args.role, &args.accessible)
        }
    };

    let expected_event = match (&args.event, args.expected) {
        (Some(path), _) => Some(read_json::<EventRef>(path)?),
        (None, Some((event_id, campus_id))) => Some(EventRef::new(event_id, campus_id, "")),
        (None, None) => None,
    };

    let config = match &args.config {
        Some(path) => read_json::<ValidatorConfig>(path)?,
        None => ValidatorConfig::default(),
    };
    debug!(?config, campus = %ctx.current_campus.code, "validating scanned code");

    let validator = CredentialValidator::new(config);
    let result = validator.validate(&args.code, &ctx, expected_event.as_ref());

    if args.json {
        println!("{}", format_json(&result)?);
    } else {
        match &result {
            ValidationResult::Accepted(acceptance) => {
                let scope = if acceptance.is_legacy {
                    "legacy"
                } else if acceptance.cross_campus_access {
                    "cross-campus"
                } else {
                    "campus matched"
                };
                println!("ACCEPTED ({scope})");
                print_payload_header();
                println!("{}", format_payload_row(&acceptance.payload));
            }
            ValidationResult::Rejected(rejection) => {
                println!("REJECTED {}", rejection.error_code);
                println!("{}", rejection.message);
            }
        }
    }

    if args.strict && !result.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}
