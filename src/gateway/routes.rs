//! Route classification for the edge gate.
//!
//! Classification is derived per request from a fixed prefix rule; nothing is
//! stored. The admin root and the registration entry points stay reachable
//! without a session because the first administrator may not exist yet, and
//! `/admin/check` is the pre-auth existence probe the registration flow uses.

/// Administrative area prefix.
pub const ADMIN_ROOT: &str = "/admin";
/// First-administrator registration flow.
pub const ADMIN_REGISTER: &str = "/admin/register";
/// Administrator existence probe, callable before any session exists.
pub const ADMIN_CHECK: &str = "/admin/check";
/// Administrative dashboard.
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
/// Login page.
pub const LOGIN: &str = "/login";
/// Login target carrying the return context of the admin area.
pub const LOGIN_FROM_ADMIN: &str = "/login?from=admin";
/// Application root, where non-admin users are sent.
pub const APP_ROOT: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Under the admin prefix and gated by the edge filter.
    ProtectedAdmin,
    /// Under the admin prefix but always reachable.
    AdminExempt,
    /// Everything else; the gateway does not interfere.
    Public,
}

/// Classify a request path against the fixed admin prefix rule.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    match trimmed {
        ADMIN_ROOT | ADMIN_REGISTER | ADMIN_CHECK => RouteClass::AdminExempt,
        _ if trimmed.starts_with("/admin/") => RouteClass::ProtectedAdmin,
        _ => RouteClass::Public,
    }
}
