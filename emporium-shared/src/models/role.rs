use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Access level of an authenticated user.
///
/// The backend reports roles as free-form strings ("SuperAdmin",
/// "Employee", "customer", ...). [`Role::resolve`] is the single place
/// that maps those onto this fixed set; guards and UI branches only
/// ever see the enum, never the raw string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Shopper,
    Employee,
    Admin,
}

impl Role {
    /// Map a raw backend role string onto the known set.
    ///
    /// Matching is case-insensitive and substring-based: anything
    /// containing "admin" (which covers "superadmin") resolves to
    /// [`Role::Admin`], anything containing "employee" to
    /// [`Role::Employee`], and everything else to [`Role::Shopper`].
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        if lowered.contains("admin") {
            Self::Admin
        } else if lowered.contains("employee") {
            Self::Employee
        } else {
            Self::Shopper
        }
    }

    /// Whether this role is granted access to the employee portal.
    #[must_use]
    pub const fn is_back_office(self) -> bool {
        matches!(self, Self::Employee | Self::Admin)
    }

    /// Canonical string representation used by persistence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shopper => "shopper",
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "shopper" => Ok(Self::Shopper),
            "employee" => Ok(Self::Employee),
            "admin" => Ok(Self::Admin),
            _ => Err("unknown role"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(Role::resolve("Admin"), Role::Admin);
        assert_eq!(Role::resolve("SuperAdmin"), Role::Admin);
        assert_eq!(Role::resolve("superadmin"), Role::Admin);
        assert_eq!(Role::resolve("Employee"), Role::Employee);
        assert_eq!(Role::resolve("EMPLOYEE"), Role::Employee);
    }

    #[test]
    fn resolve_defaults_to_shopper() {
        assert_eq!(Role::resolve("customer"), Role::Shopper);
        assert_eq!(Role::resolve("shopper"), Role::Shopper);
        assert_eq!(Role::resolve(""), Role::Shopper);
    }

    #[test]
    fn resolve_matches_substrings() {
        assert_eq!(Role::resolve("store-employee"), Role::Employee);
        assert_eq!(Role::resolve("AdminAssistant"), Role::Admin);
    }

    #[test]
    fn back_office_access() {
        assert!(Role::Employee.is_back_office());
        assert!(Role::Admin.is_back_office());
        assert!(!Role::Shopper.is_back_office());
    }

    #[test]
    fn role_roundtrip() {
        for (text, role) in [
            ("shopper", Role::Shopper),
            ("employee", Role::Employee),
            ("admin", Role::Admin),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(Role::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn role_invalid() {
        assert!(Role::from_str("SuperAdmin").is_err());
    }

    #[test]
    fn role_serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        let parsed: Role = serde_json::from_str(r#""employee""#).unwrap();
        assert_eq!(parsed, Role::Employee);
        // A raw backend string is not a valid persisted role.
        assert!(serde_json::from_str::<Role>(r#""SuperAdmin""#).is_err());
    }
}
