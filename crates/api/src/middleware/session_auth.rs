//! Session-based access control middleware.
//!
//! Resolves the session principal once per request, applies an
//! [`AccessPolicy`] and either forwards the request with the principal in
//! its extensions or redirects to the login page.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use domain::services::AccessPolicy;

use crate::app::AppState;
use crate::services::session::resolve_principal;

/// Applies `policy` to the request's session principal.
pub async fn require_policy(
    state: &AppState,
    policy: &AccessPolicy,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let principal = resolve_principal(
        state.sessions.as_ref(),
        req.headers(),
        &state.config.session.cookie_name,
    )
    .await;

    match policy.authorize(principal.as_ref()) {
        Ok(principal) => {
            req.extensions_mut().insert(principal.clone());
            next.run(req).await
        }
        Err(denied) => {
            tracing::debug!(
                reason = %denied,
                path = %req.uri().path(),
                "Access denied, redirecting to login"
            );
            Redirect::to(&state.config.session.login_path).into_response()
        }
    }
}

/// Middleware for admin dashboards: requires `admin` or `super_admin`.
pub async fn require_admin_session(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    require_policy(&state, &AccessPolicy::admins(), req, next).await
}
