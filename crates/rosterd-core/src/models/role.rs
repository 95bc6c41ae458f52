//! Role domain model.

use serde::{Deserialize, Serialize};

use crate::error::RosterdError;

/// User role.
///
/// Closed set — any other value is rejected at the boundary with a
/// validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    /// Wire representation (matches the stored string).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::User => "USER",
        }
    }

    /// Parse a stored/wire role string.
    pub fn parse(s: &str) -> Result<Self, RosterdError> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "USER" => Ok(Role::User),
            other => Err(RosterdError::Validation {
                message: format!("role must be ADMIN, MANAGER, or USER, got: {other}"),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_roles() {
        assert_eq!(Role::parse("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::parse("MANAGER").unwrap(), Role::Manager);
        assert_eq!(Role::parse("USER").unwrap(), Role::User);
    }

    #[test]
    fn parse_rejects_unknown_and_lowercase() {
        assert!(Role::parse("SUPERUSER").is_err());
        // The stored representation is upper-case only.
        assert!(Role::parse("admin").is_err());
    }

    #[test]
    fn serde_uses_upper_case_strings() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"MANAGER\"");
        let parsed: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }
}
