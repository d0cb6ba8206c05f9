//! Session lookup repository.

use async_trait::async_trait;
use domain::error::StoreError;
use domain::models::SessionPrincipal;
use domain::services::SessionStore;
use sqlx::PgPool;

use crate::db::store_error;
use crate::entities::SessionPrincipalEntity;
use crate::metrics::QueryTimer;

/// Repository resolving session tokens to principals.
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn find_principal(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionPrincipal>, StoreError> {
        let timer = QueryTimer::new("find_session_principal");
        let result = sqlx::query_as::<_, SessionPrincipalEntity>(
            r#"
            SELECT u.id AS user_id, u.name AS display_name, u.role
            FROM sessions s
            JOIN "user" u ON u.id = s.user_id
            WHERE s.token_hash = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result.map_err(store_error)?.map(SessionPrincipal::from))
    }
}
