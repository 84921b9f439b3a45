use crate::context::CampusContext;
use campuspass_canonical::CredentialPayload;
use std::fmt;

/// Why a caller may validate a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGrant {
    /// Credential belongs to the caller's current campus.
    HomeCampus,
    /// Caller is a super admin.
    SuperAdmin,
    /// Caller holds multi-campus access covering the credential's campus.
    MultiCampus,
}

impl AccessGrant {
    /// The credential campus equals the caller's campus.
    pub fn campus_matched(self) -> bool {
        self == AccessGrant::HomeCampus
    }

    /// Access was granted across campuses.
    pub fn cross_campus_access(self) -> bool {
        !self.campus_matched()
    }
}

/// Caller may not validate credentials from this campus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    /// Campus code of the caller.
    pub caller_campus: String,
    /// Campus code on the credential.
    pub credential_campus: String,
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "access denied: credential belongs to campus {} but caller is scoped to campus {}",
            self.credential_campus, self.caller_campus
        )
    }
}

/// Authorizes a payload's campus against the caller's context.
///
/// First match wins: same campus, then super admin, then multi-campus access
/// listing the payload's campus.
pub fn check_access(
    payload: &CredentialPayload,
    ctx: &CampusContext,
) -> Result<AccessGrant, AccessDenied> {
    let perms = &ctx.permissions;
    if payload.campus_id == ctx.current_campus.id {
        return Ok(AccessGrant::HomeCampus);
    }
    if perms.is_super_admin {
        return Ok(AccessGrant::SuperAdmin);
    }
    if perms.can_access_multiple_campuses && perms.accessible_campus_ids.contains(&payload.campus_id)
    {
        return Ok(AccessGrant::MultiCampus);
    }
    Err(AccessDenied {
        caller_campus: ctx.current_campus.code.to_string(),
        credential_campus: payload.campus_code.clone(),
    })
}
