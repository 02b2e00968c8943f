//! Authoritative UI-layer guards.
//!
//! [`AuthGuard`] is the real authentication enforcement point: it subscribes
//! to the session manager and resolves `checking -> {authenticated,
//! unauthenticated}` per mount. [`AdminGuard`] composes the authenticated
//! state with a role lookup for admin-only views. Neither guard ever shows
//! protected content before its state has positively resolved, and both go
//! inert on teardown so late resolutions cannot navigate a dead view.

use crate::gateway::{
    roles::{Role, RoleStore},
    routes,
    session::{CurrentUser, SessionEvents, SessionState},
    GatewayConfig,
};
use std::{sync::Arc, time::Duration};
use tokio::time::timeout;
use tracing::warn;

/// Navigation sink for guards.
///
/// Implementations must be idempotent: repeated calls with the same target
/// leave the UI in the same place, so out-of-order resolutions cannot strand
/// it in two places at once.
pub trait Navigator: Send + Sync {
    /// Replace the current location without a history entry, so
    /// back-navigation does not return to the gated page.
    fn replace(&self, path: &str);

    /// Push a new location.
    fn push(&self, path: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Session resolution pending; nothing renders.
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Session gate for protected views.
pub struct AuthGuard {
    phase: AuthPhase,
    user: Option<CurrentUser>,
    events: SessionEvents,
    navigator: Arc<dyn Navigator>,
    resolve_timeout: Duration,
    torn_down: bool,
}

impl AuthGuard {
    /// Mount the guard over a fresh session subscription.
    #[must_use]
    pub fn mount(
        events: SessionEvents,
        navigator: Arc<dyn Navigator>,
        config: &GatewayConfig,
    ) -> Self {
        Self {
            phase: AuthPhase::Checking,
            user: None,
            events,
            navigator,
            resolve_timeout: config.auth_resolve_timeout(),
            torn_down: false,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// Children render only in the authenticated phase.
    #[must_use]
    pub fn shows_content(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    #[must_use]
    pub const fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// Wait for the session provider to resolve and apply the outcome.
    ///
    /// The wait is bounded: a provider that never reports counts as signed
    /// out rather than blocking the view indefinitely.
    pub async fn resolve(&mut self) -> AuthPhase {
        if self.torn_down {
            return self.phase;
        }

        let state = match timeout(self.resolve_timeout, self.events.resolved()).await {
            Ok(state) => state,
            Err(_) => {
                warn!("session provider did not resolve in time, treating as signed out");
                SessionState::SignedOut
            }
        };

        self.apply(&state)
    }

    /// Wait for the next session change while mounted (e.g. a logout) and
    /// apply it.
    pub async fn watch_once(&mut self) -> AuthPhase {
        if self.torn_down {
            return self.phase;
        }
        let state = self.events.next().await;
        self.apply(&state)
    }

    /// Apply an observed session state. A no-op after teardown.
    pub fn apply(&mut self, state: &SessionState) -> AuthPhase {
        if self.torn_down {
            return self.phase;
        }

        match state {
            SessionState::SignedIn(user) => {
                self.user = Some(user.clone());
                self.phase = AuthPhase::Authenticated;
            }
            SessionState::SignedOut => {
                self.user = None;
                self.phase = AuthPhase::Unauthenticated;
                self.navigator.replace(routes::LOGIN);
            }
            SessionState::Unknown => {
                // Provider re-hydrating; fall back to rendering nothing.
                self.user = None;
                self.phase = AuthPhase::Checking;
            }
        }

        self.phase
    }

    /// Tear the guard down with its owning view. Later events are discarded
    /// and no further navigation happens.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

/// Derived admin capability, computed from the role store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminSignal {
    pub is_admin: bool,
    pub loading: bool,
}

impl AdminSignal {
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            is_admin: false,
            loading: true,
        }
    }

    #[must_use]
    pub const fn resolved(is_admin: bool) -> Self {
        Self {
            is_admin,
            loading: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminView {
    /// Role lookup pending; show a placeholder, never redirect.
    Loading,
    /// Not an admin (or torn down); nothing renders.
    Hidden,
    /// Positively resolved admin; children render.
    Content,
}

/// Role gate for admin-only views, layered on an authenticated session.
pub struct AdminGuard {
    navigator: Arc<dyn Navigator>,
    torn_down: bool,
}

impl AdminGuard {
    #[must_use]
    pub fn mount(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            torn_down: false,
        }
    }

    /// Apply the latest capability signal.
    ///
    /// Content renders only on a positively resolved `is_admin`; a pending or
    /// false value never leaks it, even transiently. Resolved non-admins are
    /// sent to the application root.
    pub fn apply(&self, signal: AdminSignal) -> AdminView {
        if self.torn_down {
            return AdminView::Hidden;
        }
        if signal.loading {
            return AdminView::Loading;
        }
        if signal.is_admin {
            AdminView::Content
        } else {
            self.navigator.replace(routes::APP_ROOT);
            AdminView::Hidden
        }
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

/// Compute the admin capability signal for a signed-in user.
///
/// Errors and timeouts resolve to non-admin: the guard then routes to the
/// application root instead of surfacing an error.
pub async fn admin_signal(
    store: &dyn RoleStore,
    user: &CurrentUser,
    query_timeout: Duration,
) -> AdminSignal {
    let role = match timeout(query_timeout, store.role_of(user.user_id)).await {
        Ok(Ok(role)) => role,
        Ok(Err(err)) => {
            warn!("role lookup failed: {err:#}");
            None
        }
        Err(_) => {
            warn!("role lookup timed out");
            None
        }
    };

    AdminSignal::resolved(role.is_some_and(Role::is_admin))
}
