//! Administrator existence endpoint.
//!
//! Always answers 200. Anything that prevents confirming an administrator
//! collapses to `hasAdmin: false`: callers are never told an administrator
//! exists that could not be confirmed. Note the page-level bootstrap fails
//! the other way; the asymmetry is intentional.

use crate::gateway::{roles::RoleStore, GatewayConfig};
use axum::{extract::Extension, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::error;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AdminCheckResponse {
    #[serde(rename = "hasAdmin")]
    pub has_admin: bool,
}

#[utoipa::path(
    get,
    path = "/admin/check",
    responses(
        (status = 200, description = "Whether an administrator exists; false when the check could not be confirmed", body = AdminCheckResponse)
    ),
    tag = "admin"
)]
pub async fn admin_check(
    store: Extension<Arc<dyn RoleStore>>,
    config: Extension<GatewayConfig>,
) -> Json<AdminCheckResponse> {
    let has_admin = match timeout(config.role_query_timeout(), store.admin_exists()).await {
        Ok(Ok(exists)) => exists,
        Ok(Err(err)) => {
            error!("administrator existence check failed, reporting none: {err:#}");
            false
        }
        Err(_) => {
            error!("administrator existence check timed out, reporting none");
            false
        }
    };

    Json(AdminCheckResponse { has_admin })
}
