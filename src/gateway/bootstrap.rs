//! One-shot admin bootstrap decision.
//!
//! Executed on each entry to the administrative root: if no administrator
//! record exists yet the visitor goes to first-administrator registration,
//! otherwise to the dashboard. A failing or slow existence query also goes
//! to registration. That fail-open default is deliberate: the very first
//! administrator must stay creatable even when the role store misbehaves,
//! which also means a transient store outage routes signed-up operators to
//! the registration page instead of blocking them. `/admin/check` makes the
//! opposite call; both defaults are preserved on purpose.

use crate::gateway::{roles::RoleStore, routes};
use std::time::Duration;
use tokio::time::timeout;
use tracing::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapDestination {
    /// No administrator yet: create the first one.
    Registration,
    /// At least one administrator exists: enter the dashboard.
    Dashboard,
}

impl BootstrapDestination {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Registration => routes::ADMIN_REGISTER,
            Self::Dashboard => routes::ADMIN_DASHBOARD,
        }
    }
}

/// Decide where entry to the admin root leads.
pub async fn decide(store: &dyn RoleStore, query_timeout: Duration) -> BootstrapDestination {
    match timeout(query_timeout, store.admin_exists()).await {
        Ok(Ok(true)) => BootstrapDestination::Dashboard,
        Ok(Ok(false)) => BootstrapDestination::Registration,
        Ok(Err(err)) => {
            error!("administrator existence check failed, falling back to registration: {err:#}");
            BootstrapDestination::Registration
        }
        Err(_) => {
            error!("administrator existence check timed out, falling back to registration");
            BootstrapDestination::Registration
        }
    }
}
