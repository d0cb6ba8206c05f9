//! Session principal and roles.

use std::fmt;

/// Role attached to a portal user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    SuperAdmin,
    /// Any role without administrative access, kept verbatim.
    Other(String),
}

impl Role {
    /// Parses the role column. Matching is exact; anything else, including
    /// case or whitespace variants of the admin roles, is kept as `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            "super_admin" => Role::SuperAdmin,
            _ => Role::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
            Role::Other(value) => value,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPrincipal {
    pub user_id: i64,
    pub display_name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("super_admin"), Role::SuperAdmin);
    }

    #[test]
    fn test_role_parse_variants_are_other() {
        for value in ["Admin", "ADMIN", " admin ", "Super_Admin", "SUPER_ADMIN"] {
            assert_eq!(Role::parse(value), Role::Other(value.to_string()));
        }
    }

    #[test]
    fn test_role_parse_other_preserved() {
        assert_eq!(Role::parse("ministry_user"), Role::Other("ministry_user".to_string()));
        assert_eq!(Role::parse("ministry_user").to_string(), "ministry_user");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::SuperAdmin.to_string(), "super_admin");
    }
}
