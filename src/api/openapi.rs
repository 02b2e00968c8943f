use crate::api::handlers::{admin_check, health, reminders};
use axum::response::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "agendo",
        description = "Appointment booking service API"
    ),
    paths(
        health::health,
        admin_check::admin_check,
        reminders::create_reminders
    ),
    components(schemas(
        health::Health,
        admin_check::AdminCheckResponse,
        reminders::ReminderResponse
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "admin", description = "Administrative area gateway"),
        (name = "reminders", description = "Appointment reminder triggers")
    )
)]
pub struct ApiDoc;

/// Generated `OpenAPI` document.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Serve the `OpenAPI` document as JSON.
pub async fn serve() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}
