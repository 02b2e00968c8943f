//! Access-control gateway for the administrative area.
//!
//! Authorization decisions are made at two tiers with different capabilities:
//!
//! 1. The [`edge`] gate runs inside request handling and sees only the
//!    inbound cookie set. It filters cheaply on cookie *presence* and
//!    redirects everything else under the admin prefix to the login page.
//! 2. The [`guard`] layer is authoritative. It subscribes to the
//!    [`session`] manager's state stream, resolves the signed-in user, and
//!    composes a [`roles`] lookup for admin-only views.
//!
//! Entry to the admin root additionally runs the one-shot [`bootstrap`]
//! decision: if no administrator exists yet, the visitor is routed to the
//! first-administrator registration flow instead of the dashboard.
//!
//! Failure defaults differ by surface and are both intentional: bootstrap
//! fails open to registration, while `/admin/check` fails closed to
//! `hasAdmin: false`. See DESIGN.md before "unifying" them.

pub mod bootstrap;
pub mod edge;
pub mod guard;
pub mod roles;
pub mod routes;
pub mod session;

use std::time::Duration;

/// Gateway tunables. All async waits in the gateway are bounded; the
/// fallback on expiry is the documented failure default of each surface.
#[derive(Clone, Copy, Debug)]
pub struct GatewayConfig {
    auth_resolve_timeout: Duration,
    role_query_timeout: Duration,
}

impl GatewayConfig {
    /// Default config: 5s bounded wait on session resolution and 3s on
    /// role-store queries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            auth_resolve_timeout: Duration::from_secs(5),
            role_query_timeout: Duration::from_secs(3),
        }
    }

    #[must_use]
    pub fn with_auth_resolve_timeout_seconds(mut self, seconds: u64) -> Self {
        self.auth_resolve_timeout = Duration::from_secs(seconds);
        self
    }

    #[must_use]
    pub fn with_role_query_timeout_seconds(mut self, seconds: u64) -> Self {
        self.role_query_timeout = Duration::from_secs(seconds);
        self
    }

    /// Zero timeouts would turn every resolution into its fallback.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.auth_resolve_timeout.is_zero() {
            self.auth_resolve_timeout = Duration::from_secs(1);
        }
        if self.role_query_timeout.is_zero() {
            self.role_query_timeout = Duration::from_secs(1);
        }
        self
    }

    #[must_use]
    pub const fn auth_resolve_timeout(&self) -> Duration {
        self.auth_resolve_timeout
    }

    #[must_use]
    pub const fn role_query_timeout(&self) -> Duration {
        self.role_query_timeout
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let config = GatewayConfig::new();
        assert_eq!(config.auth_resolve_timeout(), Duration::from_secs(5));
        assert_eq!(config.role_query_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_builder_overrides() {
        let config = GatewayConfig::new()
            .with_auth_resolve_timeout_seconds(10)
            .with_role_query_timeout_seconds(2);
        assert_eq!(config.auth_resolve_timeout(), Duration::from_secs(10));
        assert_eq!(config.role_query_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_normalize_rejects_zero() {
        let config = GatewayConfig::new()
            .with_auth_resolve_timeout_seconds(0)
            .with_role_query_timeout_seconds(0)
            .normalize();
        assert_eq!(config.auth_resolve_timeout(), Duration::from_secs(1));
        assert_eq!(config.role_query_timeout(), Duration::from_secs(1));
    }
}
