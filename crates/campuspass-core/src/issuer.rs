use crate::clock::{Clock, SystemClock};
use crate::context::{CampusContext, EventRef};
use crate::envelope::encode_envelope;
use crate::errors::IssueError;
use crate::legacy::SEPARATOR;
use campuspass_canonical::{sign, title_slug, CampusCode, CredentialPayload, PayloadVersion};
use serde::Serialize;
use tracing::info;

/// A freshly issued credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedCredential {
    /// Display code: `<CAMPUS>_<TITLE_SLUG>_<millis>`.
    pub code: String,
    /// Tagged envelope carrying the full signed payload.
    pub envelope: String,
    /// Payload as issued.
    pub payload: CredentialPayload,
    /// Two-line summary: campus, then event title.
    pub display_text: String,
    /// Passed through from the event.
    pub is_multi_campus: bool,
}

/// Issues credentials for an event at the caller's current campus.
#[derive(Debug, Clone, Default)]
pub struct CredentialIssuer<C = SystemClock> {
    clock: C,
}

impl CredentialIssuer<SystemClock> {
    /// Issuer stamping credentials with wall-clock time.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> CredentialIssuer<C> {
    /// Issuer stamping credentials with the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Issues a credential for `event` at `ctx.current_campus`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError`] when the event lacks an id or title, or the campus
    /// lacks an id, has a malformed code, or is not registered.
    pub fn issue(&self, event: &EventRef, ctx: &CampusContext) -> Result<IssuedCredential, IssueError> {
        issue_at(event, ctx, self.clock.now_millis())
    }
}

/// Issues a credential stamped with `now_millis`.
pub fn issue_at(
    event: &EventRef,
    ctx: &CampusContext,
    now_millis: i64,
) -> Result<IssuedCredential, IssueError> {
    if event.id == 0 {
        return Err(IssueError::MissingEventId);
    }
    let slug = title_slug(&event.title).ok_or(IssueError::MissingEventTitle)?;

    let campus = &ctx.current_campus;
    if campus.id == 0 {
        return Err(IssueError::MissingCampusId);
    }
    let campus_code = CampusCode::parse(campus.code.as_str())?;
    if !campus.is_registered() {
        return Err(IssueError::UnregisteredCampus {
            id: campus.id,
            code: campus_code.to_string(),
        });
    }

    let payload = CredentialPayload {
        event_id: event.id,
        campus_id: campus.id,
        campus_code: campus_code.to_string(),
        issued_at: Some(now_millis),
        signature: sign(event.id, campus.id, now_millis),
        version: PayloadVersion::CampusAware,
    };
    let code = format!("{campus_code}{SEPARATOR}{slug}{SEPARATOR}{now_millis}");
    let envelope = encode_envelope(&payload)?;

    let campus_label = if campus.display_name.trim().is_empty() {
        campus_code.to_string()
    } else {
        format!("{} ({})", campus.display_name, campus_code)
    };
    let display_text = format!("{campus_label}\n{}", event.title.trim());

    info!(
        event_id = event.id,
        campus = %campus_code,
        issued_at = now_millis,
        "issued check-in credential"
    );

    Ok(IssuedCredential {
        code,
        envelope,
        payload,
        display_text,
        is_multi_campus: event.is_multi_campus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::context::Role;
    use campuspass_canonical::Campus;

    const NOW: i64 = 1_760_000_000_000;

    fn ctx() -> CampusContext {
        CampusContext::for_user(Campus::known(1).unwrap(), Role::Organizer, &[])
    }

    #[test]
    fn display_text_has_campus_then_title() {
        let issued = CredentialIssuer::with_clock(FixedClock(NOW))
            .issue(&EventRef::new(7, 1, "Science Fair"), &ctx())
            .unwrap();
        assert_eq!(
            issued.display_text,
            "Surigao del Norte State University (SNSU)\nScience Fair"
        );
    }

    #[test]
    fn missing_fields_are_misuse() {
        let issuer = CredentialIssuer::with_clock(FixedClock(NOW));
        assert!(matches!(
            issuer.issue(&EventRef::new(0, 1, "Fair"), &ctx()),
            Err(IssueError::MissingEventId)
        ));
        assert!(matches!(
            issuer.issue(&EventRef::new(7, 1, "  "), &ctx()),
            Err(IssueError::MissingEventTitle)
        ));

        let mut no_id = ctx();
        no_id.current_campus.id = 0;
        assert!(matches!(
            issuer.issue(&EventRef::new(7, 1, "Fair"), &no_id),
            Err(IssueError::MissingCampusId)
        ));

        let mut no_code = ctx();
        no_code.current_campus.code = "".into();
        assert!(matches!(
            issuer.issue(&EventRef::new(7, 1, "Fair"), &no_code),
            Err(IssueError::InvalidCampusCode(_))
        ));
    }

    #[test]
    fn unregistered_campus_is_refused() {
        let ctx = CampusContext::for_user(Campus::new(9, "XYZ", "Elsewhere"), Role::Organizer, &[]);
        let result = CredentialIssuer::with_clock(FixedClock(NOW)).issue(&EventRef::new(7, 9, "Fair"), &ctx);
        assert!(matches!(result, Err(IssueError::UnregisteredCampus { id: 9, .. })));
    }
}
