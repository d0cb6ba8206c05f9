//! Session cookie handling.
//!
//! Resolves the request's session cookie to a principal through the
//! configured session store.

use axum::http::{header::COOKIE, HeaderMap};
use domain::models::SessionPrincipal;
use domain::services::SessionStore;
use shared::crypto::session_token_hash;

/// Extract a cookie value from request headers by name.
pub fn extract_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|cookie_header| cookie_header.split(';'))
        .map(str::trim)
        .find_map(|cookie| {
            let (cookie_name, cookie_value) = cookie.split_once('=')?;
            (cookie_name == name).then_some(cookie_value)
        })
}

/// The current principal, or `None` for anonymous requests.
///
/// A failed lookup is logged and treated as anonymous.
pub async fn resolve_principal(
    sessions: &dyn SessionStore,
    headers: &HeaderMap,
    cookie_name: &str,
) -> Option<SessionPrincipal> {
    let token = extract_cookie(headers, cookie_name)?;
    let token_hash = session_token_hash(token)?;

    match sessions.find_principal(&token_hash).await {
        Ok(principal) => principal,
        Err(e) => {
            tracing::warn!(error = %e, "Session lookup failed, treating request as anonymous");
            None
        }
    }
}
