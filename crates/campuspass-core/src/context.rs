use campuspass_canonical::{Campus, CampusId, EventId, KNOWN_CAMPUSES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Platform role of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Attendee.
    Student,
    /// Event organizer.
    Organizer,
    /// Administrator of one or more campuses.
    CampusAdmin,
    /// Platform-wide administrator.
    SuperAdmin,
}

/// Cross-campus permission flags resolved for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusPermissions {
    /// Caller may validate credentials from any campus.
    #[serde(default)]
    pub is_super_admin: bool,
    /// Caller may validate credentials from `accessible_campus_ids`.
    #[serde(default)]
    pub can_access_multiple_campuses: bool,
    /// Campuses reachable through multi-campus access.
    #[serde(default)]
    pub accessible_campus_ids: BTreeSet<CampusId>,
}

impl CampusPermissions {
    /// Permissions for a caller confined to one campus.
    pub fn single_campus(home: CampusId) -> Self {
        Self {
            is_super_admin: false,
            can_access_multiple_campuses: false,
            accessible_campus_ids: BTreeSet::from([home]),
        }
    }

    /// Resolves permissions from a role.
    ///
    /// Super admins reach every registered campus. Campus admins with an
    /// assignment list reach those campuses. Everyone else stays home.
    pub fn for_role(role: Role, home: CampusId, assigned: &[CampusId]) -> Self {
        match role {
            Role::SuperAdmin => Self {
                is_super_admin: true,
                can_access_multiple_campuses: true,
                accessible_campus_ids: KNOWN_CAMPUSES.iter().map(|c| c.id).collect(),
            },
            Role::CampusAdmin if !assigned.is_empty() => Self {
                is_super_admin: false,
                can_access_multiple_campuses: true,
                accessible_campus_ids: assigned.iter().copied().collect(),
            },
            _ => Self::single_campus(home),
        }
    }
}

/// Who is scanning, and from which campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusContext {
    /// Campus the caller is currently operating in.
    pub current_campus: Campus,
    /// Caller's cross-campus permissions.
    #[serde(default)]
    pub permissions: CampusPermissions,
}

impl CampusContext {
    /// Builds a context from explicit permissions.
    pub fn new(current_campus: Campus, permissions: CampusPermissions) -> Self {
        Self {
            current_campus,
            permissions,
        }
    }

    /// Builds a context for a user with the given role.
    pub fn for_user(current_campus: Campus, role: Role, assigned: &[CampusId]) -> Self {
        let permissions = CampusPermissions::for_role(role, current_campus.id, assigned);
        Self::new(current_campus, permissions)
    }
}

/// Event record supplied for issuance or as the expected event on a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    /// Event identifier.
    pub id: EventId,
    /// Hosting campus.
    pub campus_id: CampusId,
    /// Event title.
    #[serde(default)]
    pub title: String,
    /// Whether attendees from other campuses may check in.
    #[serde(default)]
    pub is_multi_campus: bool,
}

impl EventRef {
    /// Builds an event reference.
    pub fn new(id: EventId, campus_id: CampusId, title: impl Into<String>) -> Self {
        Self {
            id,
            campus_id,
            title: title.into(),
            is_multi_campus: false,
        }
    }

    /// Marks the event as open to multiple campuses.
    pub fn multi_campus(mut self) -> Self {
        self.is_multi_campus = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_reaches_every_registered_campus() {
        let perms = CampusPermissions::for_role(Role::SuperAdmin, 2, &[]);
        assert!(perms.is_super_admin);
        assert_eq!(perms.accessible_campus_ids, BTreeSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn campus_admin_without_assignment_stays_home() {
        let perms = CampusPermissions::for_role(Role::CampusAdmin, 3, &[]);
        assert_eq!(perms, CampusPermissions::single_campus(3));

        let perms = CampusPermissions::for_role(Role::CampusAdmin, 3, &[3, 4]);
        assert!(perms.can_access_multiple_campuses);
        assert!(!perms.is_super_admin);
    }

    #[test]
    fn students_ignore_assignments() {
        let perms = CampusPermissions::for_role(Role::Student, 1, &[2, 3]);
        assert_eq!(perms, CampusPermissions::single_campus(1));
    }

    #[test]
    fn context_deserializes_from_session_shape() {
        let ctx: CampusContext = serde_json::from_str(
            r#"{
                "currentCampus": {"id": 1, "code": "SNSU", "displayName": "SNSU"},
                "permissions": {
                    "isSuperAdmin": false,
                    "canAccessMultipleCampuses": true,
                    "accessibleCampusIds": [1, 2]
                }
            }"#,
        )
        .unwrap();

        assert!(ctx.permissions.accessible_campus_ids.contains(&2));
        assert_eq!(ctx.current_campus.id, 1);
    }
}
