//! Prometheus metrics for the portal.
//!
//! Request counters and latencies are recorded per matched route; audit
//! export activity has its own counters.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{header, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::models::ExportFormat;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Instant;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Label set shared by the request counter and latency histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteLabels {
    method: &'static str,
    route: String,
}

impl RouteLabels {
    /// Uses the route template, never the raw path, to bound cardinality.
    fn of(req: &Request<Body>) -> Self {
        Self {
            method: method_label(req.method()),
            route: req
                .extensions()
                .get::<MatchedPath>()
                .map_or_else(|| "unmatched".to_string(), |p| p.as_str().to_string()),
        }
    }
}

/// Records `http_requests_total` and `http_request_duration_seconds`.
pub async fn metrics_middleware(req: Request<Body>, next: Next) -> Response {
    let labels = RouteLabels::of(&req);
    let started = Instant::now();

    let response = next.run(req).await;

    histogram!(
        "http_request_duration_seconds",
        "method" => labels.method,
        "path" => labels.route.clone()
    )
    .record(started.elapsed().as_secs_f64());
    counter!(
        "http_requests_total",
        "method" => labels.method,
        "path" => labels.route,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);

    response
}

/// The portal only serves reads; anything else shares one label.
fn method_label(method: &Method) -> &'static str {
    if *method == Method::GET {
        "GET"
    } else if *method == Method::HEAD {
        "HEAD"
    } else {
        "OTHER"
    }
}

/// Count a completed audit log export.
pub fn record_audit_export(format: ExportFormat) {
    counter!("audit_log_exports_total", "format" => format.extension()).increment(1);
}

/// Count a read that fell back to an empty result.
pub fn record_audit_store_failure() {
    counter!("audit_log_store_failures_total").increment(1);
}

/// Handler for /metrics endpoint that returns Prometheus text format.
pub async fn metrics_handler() -> Response {
    match PROMETHEUS_HANDLE.get() {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "Metrics not initialized").into_response(),
    }
}

/// Install the global Prometheus recorder.
///
/// Call once during startup before any metrics are recorded. A second call
/// leaves the first recorder in place.
pub fn init_metrics() -> Result<(), BuildError> {
    if PROMETHEUS_HANDLE.get().is_some() {
        tracing::warn!("Prometheus recorder already installed");
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .set_buckets(&[0.001, 0.005, 0.01, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0])?
        .install_recorder()?;

    let _ = PROMETHEUS_HANDLE.set(handle);
    Ok(())
}
