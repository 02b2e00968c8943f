//! Edge gate: stateless per-request filter for the admin area.
//!
//! This tier filters on session-cookie *presence* and nothing else. It does
//! not check the cookie's signature, expiry, or subject; a forged cookie
//! passes the edge and is caught by the authoritative auth guard. Keep that
//! split in mind before "fixing" the check here.

use crate::gateway::{
    routes::{self, RouteClass},
    session,
};
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Outcome of the per-request evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeDecision {
    Allow,
    Redirect(String),
}

/// Evaluate a request path against the protected prefix rule.
#[must_use]
pub fn evaluate(path: &str, has_cookie: bool) -> EdgeDecision {
    match routes::classify(path) {
        RouteClass::AdminExempt | RouteClass::Public => EdgeDecision::Allow,
        RouteClass::ProtectedAdmin if has_cookie => EdgeDecision::Allow,
        RouteClass::ProtectedAdmin => {
            // Carry the origin so login can return the user afterwards.
            EdgeDecision::Redirect(routes::LOGIN_FROM_ADMIN.to_string())
        }
    }
}

/// Axum middleware applying [`evaluate`] to every inbound request.
pub async fn edge_gate(request: Request, next: Next) -> Response {
    let has_cookie = session::has_session_cookie(request.headers());

    match evaluate(request.uri().path(), has_cookie) {
        EdgeDecision::Allow => next.run(request).await,
        EdgeDecision::Redirect(target) => {
            tracing::debug!(
                path = %request.uri().path(),
                "no session cookie on protected admin path, redirecting"
            );
            Redirect::temporary(&target).into_response()
        }
    }
}
