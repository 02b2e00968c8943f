use crate::{
    api::handlers::{admin_check, health, pages, reminders},
    gateway::{
        edge,
        roles::{PgRoleStore, RoleStore},
        GatewayConfig,
    },
};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    middleware,
    routing::{get, post},
    Extension, Router,
};
use sqlx::postgres::PgPoolOptions;
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer, set_header::SetRequestHeaderLayer, trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;

pub mod handlers;
mod openapi;

pub use openapi::openapi;

/// Collaborators shared through the router. Tests drive the same routes with
/// in-memory stand-ins.
#[derive(Clone)]
pub struct RouterContext {
    pub role_store: Arc<dyn RoleStore>,
    pub reminders: Arc<dyn reminders::ReminderScheduler>,
    pub config: GatewayConfig,
}

/// Build the application router with the edge gate applied to every route.
#[must_use]
pub fn router(ctx: RouterContext) -> Router {
    Router::new()
        .route("/", get(pages::root))
        .route("/login", get(pages::login))
        .route("/admin", get(pages::admin_entry))
        .route("/admin/register", get(pages::admin_register))
        .route("/admin/dashboard", get(pages::admin_dashboard))
        .route("/admin/check", get(admin_check::admin_check))
        .route("/api/reminders", post(reminders::create_reminders))
        .route("/openapi.json", get(openapi::serve))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(edge::edge_gate))
                .layer(Extension(ctx.role_store))
                .layer(Extension(ctx.reminders))
                .layer(Extension(ctx.config)),
        )
}

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(port: u16, dsn: &str, config: GatewayConfig) -> Result<()> {
    // Connect to database
    let pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(5)
        .max_lifetime(Duration::from_secs(60 * 2))
        .test_before_acquire(true)
        .connect(dsn)
        .await
        .context("Failed to connect to database")?;

    let ctx = RouterContext {
        role_store: Arc::new(PgRoleStore::new(pool.clone())),
        reminders: Arc::new(reminders::LogReminderScheduler),
        config,
    };

    let app = router(ctx)
        .route("/health", get(health::health).options(health::health))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(Extension(pool)),
        );

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
