//! Audit log repository.
//!
//! The only place that knows the audit log's table and column names.

use async_trait::async_trait;
use domain::error::StoreError;
use domain::models::AuditLogEntry;
use domain::services::AuditLogStore;
use sqlx::PgPool;

use crate::db::store_error;
use crate::entities::AuditLogEntity;
use crate::metrics::QueryTimer;

/// Left join so entries whose user was removed are still listed.
const RECENT_AUDIT_LOGS_SQL: &str = r#"
    SELECT l.id, u.name AS user_name, l.action, l.details, l.timestamp
    FROM log l
    LEFT JOIN "user" u ON u.id = l.user_id
    ORDER BY l.timestamp DESC, l.id DESC
    LIMIT $1
"#;

/// Repository for audit log database operations.
#[derive(Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogStore for AuditLogRepository {
    async fn recent(&self, limit: i64) -> Result<Vec<AuditLogEntry>, StoreError> {
        let timer = QueryTimer::new("recent_audit_logs");
        let result = sqlx::query_as::<_, AuditLogEntity>(RECENT_AUDIT_LOGS_SQL)
            .bind(limit)
            .fetch_all(&self.pool)
            .await;
        timer.record();

        let entities = result.map_err(store_error)?;
        tracing::debug!(count = entities.len(), limit, "Fetched recent audit logs");
        Ok(entities.into_iter().map(AuditLogEntry::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(store_error)
    }
}
