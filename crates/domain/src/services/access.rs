//! Role-based access policy.

use crate::error::AccessDenied;
use crate::models::{Role, SessionPrincipal};

/// A reusable "role must be one of" predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    allowed: Vec<Role>,
}

impl AccessPolicy {
    pub fn new(allowed: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Policy for the administrative dashboards: `admin` or `super_admin`.
    pub fn admins() -> Self {
        Self::new([Role::Admin, Role::SuperAdmin])
    }

    pub fn allows(&self, role: &Role) -> bool {
        self.allowed.contains(role)
    }

    /// Returns the principal when it satisfies the policy.
    pub fn authorize<'a>(
        &self,
        principal: Option<&'a SessionPrincipal>,
    ) -> Result<&'a SessionPrincipal, AccessDenied> {
        let principal = principal.ok_or(AccessDenied::NoSession)?;

        if self.allows(&principal.role) {
            Ok(principal)
        } else {
            Err(AccessDenied::InsufficientRole(principal.role.to_string()))
        }
    }
}
