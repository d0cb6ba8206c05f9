use axum::{middleware, routing::get, Router};
use domain::services::{AuditLogStore, SessionStore};
use persistence::repositories::{AuditLogRepository, SessionRepository};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin_session, security_headers_middleware,
    trace_id,
};
use crate::routes::{audit_logs, health};

/// Shared request state. Stores are trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub audit_logs: Arc<dyn AuditLogStore>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn from_pool(config: Config, pool: PgPool) -> Self {
        Self {
            config: Arc::new(config),
            audit_logs: Arc::new(AuditLogRepository::new(pool.clone())),
            sessions: Arc::new(SessionRepository::new(pool)),
        }
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    create_router(AppState::from_pool(config, pool))
}

pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Admin dashboards: session must belong to admin or super_admin.
    // Denied requests are redirected before the handler runs.
    let admin_routes = Router::new()
        .route("/admin/audit-logs", get(audit_logs::audit_logs_page))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_session,
        ));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .fallback(not_found)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Page not found".to_string())
}
