//! Appointment reminder trigger surface.
//!
//! `POST /api/reminders` invokes the reminder-creation collaborator and
//! reports the outcome. The route sits outside the protected admin prefix
//! and is therefore not gated; operators exposing it publicly should front
//! it with their own access control.

use anyhow::Result;
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::{future::Future, pin::Pin, sync::Arc};
use tracing::{error, info};
use utoipa::ToSchema;

/// Outcome of one reminder-creation run.
#[derive(Clone, Copy, Debug)]
pub struct ReminderRun {
    pub created: usize,
}

/// Reminder-creation abstraction. The real implementation scans upcoming
/// appointments and enqueues notifications; the gateway only triggers it.
pub trait ReminderScheduler: Send + Sync {
    fn run(&self) -> Pin<Box<dyn Future<Output = Result<ReminderRun>> + Send + '_>>;
}

/// Local dev scheduler that logs instead of creating real reminders.
#[derive(Clone, Copy, Debug)]
pub struct LogReminderScheduler;

impl ReminderScheduler for LogReminderScheduler {
    fn run(&self) -> Pin<Box<dyn Future<Output = Result<ReminderRun>> + Send + '_>> {
        Box::pin(async {
            info!("reminder run stub");
            Ok(ReminderRun { created: 0 })
        })
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ReminderResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/reminders",
    responses(
        (status = 200, description = "Reminder run completed", body = ReminderResponse),
        (status = 500, description = "Reminder run failed", body = ReminderResponse)
    ),
    tag = "reminders"
)]
pub async fn create_reminders(
    scheduler: Extension<Arc<dyn ReminderScheduler>>,
) -> impl IntoResponse {
    match scheduler.run().await {
        Ok(run) => (
            StatusCode::OK,
            Json(ReminderResponse {
                success: true,
                message: Some(format!("created {} reminders", run.created)),
                error: None,
            }),
        ),
        Err(err) => {
            error!("reminder run failed: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReminderResponse {
                    success: false,
                    message: None,
                    error: Some("reminder run failed".to_string()),
                }),
            )
        }
    }
}
