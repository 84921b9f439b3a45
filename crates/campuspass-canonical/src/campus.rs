use crate::identifiers::CampusCode;
use serde::{Deserialize, Serialize};

/// Numeric campus identifier.
pub type CampusId = u32;

/// The home campus; legacy codes and unknown campus codes resolve here.
pub const HOME_CAMPUS_ID: CampusId = 1;

/// Static registry entry for a campus the platform knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownCampus {
    /// Campus identifier.
    pub id: CampusId,
    /// Short uppercase campus code embedded in credential codes.
    pub code: &'static str,
    /// Human-readable campus name.
    pub display_name: &'static str,
    /// Email domain used by campus accounts.
    pub domain: &'static str,
}

/// Closed mapping of campus codes to identifiers.
pub const KNOWN_CAMPUSES: [KnownCampus; 4] = [
    KnownCampus {
        id: 1,
        code: "SNSU",
        display_name: "Surigao del Norte State University",
        domain: "snsu.edu.ph",
    },
    KnownCampus {
        id: 2,
        code: "MALIMONO",
        display_name: "SNSU Malimono Campus",
        domain: "malimono.snsu.edu.ph",
    },
    KnownCampus {
        id: 3,
        code: "DELCARMEN",
        display_name: "SNSU Del Carmen Campus",
        domain: "delcarmen.snsu.edu.ph",
    },
    KnownCampus {
        id: 4,
        code: "MAINIT",
        display_name: "SNSU Mainit Campus",
        domain: "mainit.snsu.edu.ph",
    },
];

/// Looks up a registry entry by its exact campus code.
pub fn lookup_code(code: &str) -> Option<&'static KnownCampus> {
    KNOWN_CAMPUSES.iter().find(|campus| campus.code == code)
}

/// Looks up a registry entry by campus identifier.
pub fn lookup_id(id: CampusId) -> Option<&'static KnownCampus> {
    KNOWN_CAMPUSES.iter().find(|campus| campus.id == id)
}

/// Returns true when `code` is one of the registered campus codes.
pub fn is_known_code(code: &str) -> bool {
    lookup_code(code).is_some()
}

/// Resolves a campus code to its identifier.
///
/// Unknown codes resolve to [`HOME_CAMPUS_ID`] instead of failing.
pub fn campus_id_for_code(code: &str) -> CampusId {
    lookup_code(code).map_or(HOME_CAMPUS_ID, |campus| campus.id)
}

/// Campus reference data as supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    /// Campus identifier.
    pub id: CampusId,
    /// Campus code (e.g., `SNSU`).
    pub code: CampusCode,
    /// Human-readable name.
    #[serde(default)]
    pub display_name: String,
}

impl Campus {
    /// Builds a campus record.
    pub fn new(id: CampusId, code: impl Into<CampusCode>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            display_name: display_name.into(),
        }
    }

    /// Builds the campus record for a registered identifier.
    pub fn known(id: CampusId) -> Option<Self> {
        lookup_id(id).map(Self::from)
    }

    /// Builds the campus record for a registered code.
    pub fn known_by_code(code: &str) -> Option<Self> {
        lookup_code(code).map(Self::from)
    }

    /// Returns true when this `(id, code)` pair agrees with the registry.
    pub fn is_registered(&self) -> bool {
        lookup_code(self.code.as_str()).is_some_and(|known| known.id == self.id)
    }
}

impl From<&KnownCampus> for Campus {
    fn from(known: &KnownCampus) -> Self {
        Campus::new(known.id, known.code, known.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_defaults_to_home_campus() {
        assert_eq!(campus_id_for_code("MALIMONO"), 2);
        assert_eq!(campus_id_for_code("NOWHERE"), HOME_CAMPUS_ID);
        assert_eq!(campus_id_for_code("snsu"), HOME_CAMPUS_ID);
    }

    #[test]
    fn registration_requires_matching_pair() {
        assert!(Campus::new(3, "DELCARMEN", "").is_registered());
        assert!(!Campus::new(2, "SNSU", "").is_registered());
        assert!(!Campus::new(9, "XYZ", "").is_registered());
    }

    #[test]
    fn registry_ids_are_unique() {
        for (i, a) in KNOWN_CAMPUSES.iter().enumerate() {
            for b in &KNOWN_CAMPUSES[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.code, b.code);
            }
        }
    }
}
