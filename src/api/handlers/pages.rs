//! Page surface for the booking app and the admin area.
//!
//! Rendering and styling are out of scope; these handlers return placeholder
//! markup and carry the routing decisions the gateway needs: the admin root
//! runs the one-shot bootstrap decision per entry.

use crate::gateway::{bootstrap, roles::RoleStore, GatewayConfig};
use axum::{
    extract::{Extension, Query},
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

pub async fn root() -> Html<&'static str> {
    Html("<h1>agendo</h1><p>Book an appointment.</p>")
}

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    /// Protected area the visitor came from; used to return after login.
    pub from: Option<String>,
}

pub async fn login(Query(params): Query<LoginParams>) -> Html<&'static str> {
    if let Some(from) = params.from.as_deref() {
        debug!(from, "login requested with return context");
    }
    Html("<h1>Sign in</h1>")
}

/// Administrative entry point: run the bootstrap decision and redirect.
pub async fn admin_entry(
    store: Extension<Arc<dyn RoleStore>>,
    config: Extension<GatewayConfig>,
) -> Redirect {
    let destination = bootstrap::decide(&**store, config.role_query_timeout()).await;

    info!(destination = destination.path(), "admin bootstrap decision");

    Redirect::to(destination.path())
}

pub async fn admin_register() -> Html<&'static str> {
    Html("<h1>Create the first administrator</h1>")
}

pub async fn admin_dashboard() -> Html<&'static str> {
    Html("<h1>Admin dashboard</h1>")
}
