//! Common test utilities for integration tests.
//!
//! The router is driven entirely through in-memory stores, so these tests need
//! no database. Stores count their queries so tests can assert that denied
//! requests never reach the audit log.

// Not every integration test uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use domain::error::StoreError;
use domain::models::{AuditLogEntry, Role, SessionPrincipal};
use domain::services::{AuditLogStore, SessionStore};
use exchange_portal_api::app::{create_router, AppState};
use exchange_portal_api::config::Config;
use shared::crypto::sha256_hex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const SESSION_COOKIE: &str = "portal_session";

/// Audit log store backed by a vector, optionally failing every call.
#[derive(Default)]
pub struct InMemoryAuditLogs {
    entries: Mutex<Vec<AuditLogEntry>>,
    failing: bool,
    queries: AtomicUsize,
    last_limit: Mutex<Option<i64>>,
}

impl InMemoryAuditLogs {
    pub fn with_entries(entries: Vec<AuditLogEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Number of `recent` calls served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn last_limit(&self) -> Option<i64> {
        *self.last_limit.lock().unwrap()
    }
}

#[async_trait]
impl AuditLogStore for InMemoryAuditLogs {
    async fn recent(&self, limit: i64) -> Result<Vec<AuditLogEntry>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        *self.last_limit.lock().unwrap() = Some(limit);

        if self.failing {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        entries.truncate(limit.max(0) as usize);
        Ok(entries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.failing {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Session store keyed by token hash, as the real sessions table is.
#[derive(Default)]
pub struct InMemorySessions {
    by_hash: Mutex<HashMap<String, SessionPrincipal>>,
}

impl InMemorySessions {
    /// Register a raw session token for `principal`.
    pub fn insert(&self, token: &str, principal: SessionPrincipal) {
        self.by_hash
            .lock()
            .unwrap()
            .insert(sha256_hex(token), principal);
    }
}

#[async_trait]
impl SessionStore for InMemorySessions {
    async fn find_principal(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionPrincipal>, StoreError> {
        Ok(self.by_hash.lock().unwrap().get(token_hash).cloned())
    }
}

/// A router plus handles on its stores.
pub struct TestApp {
    pub router: Router,
    pub audit_logs: Arc<InMemoryAuditLogs>,
    pub sessions: Arc<InMemorySessions>,
}

pub fn test_config() -> Config {
    Config::load_for_test(&[("database.url", "postgres://unused@localhost/unused")])
        .expect("Failed to load test configuration")
}

pub fn create_test_app(audit_logs: InMemoryAuditLogs) -> TestApp {
    create_test_app_with_config(test_config(), audit_logs)
}

pub fn create_test_app_with_config(config: Config, audit_logs: InMemoryAuditLogs) -> TestApp {
    let audit_logs = Arc::new(audit_logs);
    let sessions = Arc::new(InMemorySessions::default());

    let state = AppState {
        config: Arc::new(config),
        audit_logs: audit_logs.clone(),
        sessions: sessions.clone(),
    };

    TestApp {
        router: create_router(state),
        audit_logs,
        sessions,
    }
}

pub fn principal(user_id: i64, name: &str, role: Role) -> SessionPrincipal {
    SessionPrincipal {
        user_id,
        display_name: name.to_string(),
        role,
    }
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn entry(
    id: i64,
    user_name: Option<&str>,
    action: &str,
    details: &str,
    timestamp: DateTime<Utc>,
) -> AuditLogEntry {
    AuditLogEntry {
        id,
        user_name: user_name.map(str::to_string),
        action: action.to_string(),
        details: details.to_string(),
        timestamp,
    }
}

/// Build a GET request, optionally carrying a session cookie.
pub fn get_request(uri: &str, session_token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session_token {
        builder = builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
