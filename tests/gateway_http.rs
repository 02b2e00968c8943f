//! In-process HTTP tests for the access-control gateway.
//!
//! Drives the real router with in-memory collaborators: the edge gate over
//! protected admin paths, the bootstrap redirect at the admin root, the
//! `/admin/check` existence endpoint, and the reminder trigger surface.

use agendo::api::handlers::reminders::{LogReminderScheduler, ReminderRun, ReminderScheduler};
use agendo::api::{router, RouterContext};
use agendo::gateway::roles::{BoxFuture, Role, RoleStore};
use agendo::gateway::GatewayConfig;
use anyhow::{anyhow, Result};
use axum::{
    body::{to_bytes, Body},
    http::{
        header::{COOKIE, LOCATION},
        Request, StatusCode,
    },
    response::Response,
    Router,
};
use serde_json::Value;
use std::{future, sync::Arc};
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Clone, Copy)]
enum StoreMode {
    HasAdmin,
    NoAdmin,
    Failing,
}

struct StaticRoleStore(StoreMode);

impl RoleStore for StaticRoleStore {
    fn admin_exists(&self) -> BoxFuture<'_, Result<bool>> {
        match self.0 {
            StoreMode::HasAdmin => Box::pin(future::ready(Ok(true))),
            StoreMode::NoAdmin => Box::pin(future::ready(Ok(false))),
            StoreMode::Failing => Box::pin(future::ready(Err(anyhow!("role store unreachable")))),
        }
    }

    fn role_of(&self, _user_id: Uuid) -> BoxFuture<'_, Result<Option<Role>>> {
        match self.0 {
            StoreMode::HasAdmin => Box::pin(future::ready(Ok(Some(Role::Administrator)))),
            StoreMode::NoAdmin => Box::pin(future::ready(Ok(None))),
            StoreMode::Failing => Box::pin(future::ready(Err(anyhow!("role store unreachable")))),
        }
    }
}

struct FailingScheduler;

impl ReminderScheduler for FailingScheduler {
    fn run(&self) -> std::pin::Pin<Box<dyn future::Future<Output = Result<ReminderRun>> + Send + '_>> {
        Box::pin(async { Err(anyhow!("notification backend down")) })
    }
}

fn app(mode: StoreMode) -> Router {
    router(RouterContext {
        role_store: Arc::new(StaticRoleStore(mode)),
        reminders: Arc::new(LogReminderScheduler),
        config: GatewayConfig::new(),
    })
}

async fn get(app: Router, path: &str) -> Response {
    app.oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_with_cookie(app: Router, path: &str, cookie: &str) -> Response {
    app.oneshot(
        Request::get(path)
            .header(COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn protected_admin_path_without_cookie_redirects_to_login() {
    let response = get(app(StoreMode::HasAdmin), "/admin/dashboard").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login?from=admin");
}

#[tokio::test]
async fn protected_admin_path_with_cookie_passes_the_edge() {
    // Any cookie value passes: the edge checks presence, not validity.
    let response = get_with_cookie(
        app(StoreMode::HasAdmin),
        "/admin/dashboard",
        "agendo_session=not-even-a-real-token",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn registration_without_cookie_passes_through() {
    let response = get(app(StoreMode::NoAdmin), "/admin/register").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_paths_are_untouched() {
    let response = get(app(StoreMode::NoAdmin), "/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app(StoreMode::NoAdmin), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_root_without_admins_bootstraps_to_registration() {
    let response = get(app(StoreMode::NoAdmin), "/admin").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/register");
}

#[tokio::test]
async fn admin_root_with_admin_bootstraps_to_dashboard() {
    let response = get(app(StoreMode::HasAdmin), "/admin").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");
}

#[tokio::test]
async fn admin_root_fails_open_to_registration_on_store_failure() {
    let response = get(app(StoreMode::Failing), "/admin").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/register");
}

#[tokio::test]
async fn admin_check_reports_existing_admin() {
    let response = get(app(StoreMode::HasAdmin), "/admin/check").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["hasAdmin"], Value::Bool(true));
}

#[tokio::test]
async fn admin_check_reports_missing_admin() {
    let response = get(app(StoreMode::NoAdmin), "/admin/check").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["hasAdmin"], Value::Bool(false));
}

#[tokio::test]
async fn admin_check_fails_closed_with_success_status() {
    // Store failure collapses to hasAdmin:false, never a non-success status.
    let response = get(app(StoreMode::Failing), "/admin/check").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["hasAdmin"], Value::Bool(false));
}

#[tokio::test]
async fn reminder_trigger_reports_success() {
    let response = app(StoreMode::HasAdmin)
        .oneshot(
            Request::post("/api/reminders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], Value::Bool(true));
}

#[tokio::test]
async fn reminder_trigger_reports_failure() {
    let app = router(RouterContext {
        role_store: Arc::new(StaticRoleStore(StoreMode::HasAdmin)),
        reminders: Arc::new(FailingScheduler),
        config: GatewayConfig::new(),
    });
    let response = app
        .oneshot(
            Request::post("/api/reminders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], Value::Bool(false));
    assert_eq!(json["error"], "reminder run failed");
}
