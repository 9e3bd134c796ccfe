//! Derived enums for SoundItOut sessions.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of the signed-in principal, derived from the token's `role` claim.
///
/// Never stored: it is recomputed from the claims on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Student,
    Unknown,
}

impl Role {
    /// Map a raw role claim to a `Role`.
    ///
    /// The claim is compared case-insensitively by suffix, so both the bare
    /// name (`"ADMIN"`) and the authority form (`"ROLE_ADMIN"`) are accepted.
    /// An absent claim, or any other value, maps to [`Role::Unknown`].
    #[must_use]
    pub fn from_claim(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unknown;
        };
        let upper = raw.to_uppercase();
        if upper.ends_with("ADMIN") {
            Self::Admin
        } else if upper.ends_with("STUDENT") {
            Self::Student
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("STUDENT", Role::Student)]
    #[case("student", Role::Student)]
    #[case("ROLE_STUDENT", Role::Student)]
    #[case("role_student", Role::Student)]
    #[case("ADMIN", Role::Admin)]
    #[case("ROLE_ADMIN", Role::Admin)]
    #[case("Admin", Role::Admin)]
    #[case("PARENT", Role::Unknown)]
    #[case("ADMINISTRATOR", Role::Unknown)]
    #[case("", Role::Unknown)]
    fn from_claim_matches_by_suffix(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::from_claim(Some(raw)), expected);
    }

    #[test]
    fn absent_claim_is_unknown() {
        assert_eq!(Role::from_claim(None), Role::Unknown);
    }

    #[test]
    fn display_matches_serde() {
        for role in [Role::Admin, Role::Student, Role::Unknown] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }
}
