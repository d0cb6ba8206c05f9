//! Store interfaces and the audit log reader.
//!
//! The reader never propagates store failures: a failed query degrades to an
//! empty result and a logged diagnostic so the page still renders.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{AuditLogEntry, SessionPrincipal};

/// Read access to the audit log.
#[async_trait]
pub trait AuditLogStore: Send + Sync {
    /// The `limit` most recent entries, newest first, with actor names joined in.
    async fn recent(&self, limit: i64) -> Result<Vec<AuditLogEntry>, StoreError>;

    /// Cheap connectivity check for health probes.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Resolves session tokens to principals.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Looks up an active session by the SHA-256 hex digest of its token.
    async fn find_principal(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionPrincipal>, StoreError>;
}

/// Result of reading recent audit logs.
#[derive(Debug, Clone, Default)]
pub struct RecentAuditLogs {
    pub entries: Vec<AuditLogEntry>,
    /// Set when the store failed and `entries` is empty as a fallback.
    pub store_unavailable: bool,
}

/// Fetches recent audit entries, absorbing store failures.
pub struct AuditLogReader<'a> {
    store: &'a dyn AuditLogStore,
    limit: i64,
}

impl<'a> AuditLogReader<'a> {
    pub fn new(store: &'a dyn AuditLogStore, limit: i64) -> Self {
        Self { store, limit }
    }

    pub async fn fetch_recent(&self) -> RecentAuditLogs {
        match self.store.recent(self.limit).await {
            Ok(entries) => RecentAuditLogs {
                entries,
                store_unavailable: false,
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to read audit logs, rendering empty result");
                RecentAuditLogs {
                    entries: Vec::new(),
                    store_unavailable: true,
                }
            }
        }
    }
}
