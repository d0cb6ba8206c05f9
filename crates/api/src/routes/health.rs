//! Liveness, readiness and store health probes.
//!
//! Readiness follows the audit log store: the page degrades gracefully when
//! the store is down, but load balancers should still route around it.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::time::Instant;

use crate::app::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Healthy,
    Unhealthy,
    Alive,
    Ready,
}

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ProbeStatus,
    pub version: &'static str,
    pub database: StoreProbe,
}

/// Outcome of pinging the audit log store.
#[derive(Debug, Serialize)]
pub struct StoreProbe {
    pub connected: bool,
    /// Round-trip time, omitted as `null` when the ping failed.
    pub latency_ms: Option<u64>,
}

/// Body of the liveness and readiness probes.
#[derive(Debug, Serialize)]
pub struct ProbeBody {
    pub status: ProbeStatus,
}

async fn probe_store(state: &AppState) -> StoreProbe {
    let started = Instant::now();
    match state.audit_logs.ping().await {
        Ok(()) => StoreProbe {
            connected: true,
            latency_ms: Some(started.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Audit log store ping failed");
            StoreProbe {
                connected: false,
                latency_ms: None,
            }
        }
    }
}

/// Full health report; 503 with the same body when the store is unreachable.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database = probe_store(&state).await;
    let (code, status) = if database.connected {
        (StatusCode::OK, ProbeStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ProbeStatus::Unhealthy)
    };

    (
        code,
        Json(HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

pub async fn live() -> Json<ProbeBody> {
    Json(ProbeBody {
        status: ProbeStatus::Alive,
    })
}

pub async fn ready(State(state): State<AppState>) -> Result<Json<ProbeBody>, StatusCode> {
    if probe_store(&state).await.connected {
        Ok(Json(ProbeBody {
            status: ProbeStatus::Ready,
        }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
