//! Session lookup entity.

use domain::models::{Role, SessionPrincipal};
use sqlx::FromRow;

/// The user behind an active session.
#[derive(Debug, Clone, FromRow)]
pub struct SessionPrincipalEntity {
    pub user_id: i64,
    pub display_name: String,
    pub role: String,
}

impl From<SessionPrincipalEntity> for SessionPrincipal {
    fn from(entity: SessionPrincipalEntity) -> Self {
        Self {
            user_id: entity.user_id,
            display_name: entity.display_name,
            role: Role::parse(&entity.role),
        }
    }
}
