//! Audit log entity.

use chrono::{DateTime, Utc};
use domain::models::AuditLogEntry;
use sqlx::FromRow;

/// A `log` row joined with the acting user's name.
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogEntity {
    pub id: i64,

    /// `NULL` when the referenced user no longer exists.
    pub user_name: Option<String>,

    pub action: String,

    pub details: String,

    pub timestamp: DateTime<Utc>,
}

impl From<AuditLogEntity> for AuditLogEntry {
    fn from(entity: AuditLogEntity) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            action: entity.action,
            details: entity.details,
            timestamp: entity.timestamp,
        }
    }
}
