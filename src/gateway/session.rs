//! Process-wide session state.
//!
//! The session provider (login, logout, credential issuance) is an external
//! collaborator; the gateway only observes it. [`SessionManager`] is the
//! explicit process-wide handle over that observed state: one writer, any
//! number of subscribers. Guards subscribe through [`SessionEvents`] and tear
//! the subscription down with their owning component.
//!
//! The credential is mirrored into a single named cookie so the edge gate can
//! filter on its *presence*. Nothing in this module reads the cookie value.

use axum::http::{header::COOKIE, HeaderMap};
use tokio::sync::watch;
use uuid::Uuid;

/// Name of the cookie mirroring the session credential.
pub const SESSION_COOKIE_NAME: &str = "agendo_session";

/// Identity of the signed-in user as reported by the session provider.
/// The role is deliberately absent: roles are resolved against the role
/// store, never trusted from session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Observed session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The provider has not reported yet (hydration in progress).
    #[default]
    Unknown,
    SignedOut,
    SignedIn(CurrentUser),
}

impl SessionState {
    /// True once the provider has reported either way.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub const fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::Unknown | Self::SignedOut => None,
        }
    }
}

/// Explicit process-wide session manager. Starts at
/// [`SessionState::Unknown`] until the provider hydrates.
#[derive(Debug)]
pub struct SessionManager {
    tx: watch::Sender<SessionState>,
}

impl SessionManager {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::Unknown);
        Self { tx }
    }

    /// Provider reported an active user.
    pub fn login(&self, user: CurrentUser) {
        self.tx.send_replace(SessionState::SignedIn(user));
    }

    /// Provider reported no active user (initial hydration or logout).
    pub fn logout(&self) {
        self.tx.send_replace(SessionState::SignedOut);
    }

    #[must_use]
    pub fn current(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> SessionEvents {
        SessionEvents {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscription over session-state changes. Dropped with the owning guard;
/// a dropped manager counts as signed out.
#[derive(Debug)]
pub struct SessionEvents {
    rx: watch::Receiver<SessionState>,
}

impl SessionEvents {
    /// Wait until the provider has resolved (signed in or out). Returns the
    /// current state immediately if it already has.
    pub async fn resolved(&mut self) -> SessionState {
        match self.rx.wait_for(SessionState::is_resolved).await {
            Ok(state) => state.clone(),
            Err(_) => SessionState::SignedOut,
        }
    }

    /// Wait for the next state change.
    pub async fn next(&mut self) -> SessionState {
        if self.rx.changed().await.is_err() {
            return SessionState::SignedOut;
        }
        self.rx.borrow_and_update().clone()
    }
}

/// Presence-only check used by the edge gate. The value is never inspected.
#[must_use]
pub fn has_session_cookie(headers: &HeaderMap) -> bool {
    let Some(header) = headers.get(COOKIE) else {
        return false;
    };
    let Ok(value) = header.to_str() else {
        return false;
    };
    value.split(';').any(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        parts.next().map(str::trim) == Some(SESSION_COOKIE_NAME)
    })
}
