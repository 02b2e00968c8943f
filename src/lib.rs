//! # Agendo (Appointment Booking Service)
//!
//! `agendo` is an appointment-booking service. Business records (services,
//! appointments, notifications) are plain CRUD; the part with real design is
//! the access-control gateway in [`gateway`], which keeps the administrative
//! area consistent across two layers with different capabilities:
//!
//! - An **edge gate** filters every request cheaply, using only the presence
//!   of the session cookie. It never validates the cookie.
//! - An authoritative **auth guard** subscribes to live session state and is
//!   the real enforcement point for authentication.
//! - An **admin capability guard** layers a role lookup on top, so admin-only
//!   views never render for non-admin users, not even transiently.
//! - A one-shot **admin bootstrap** decision routes the very first visitor of
//!   the admin area to "create the first administrator" while the system has
//!   no administrator yet.
//!
//! Failure defaults are deliberate and asymmetric: the page-level bootstrap
//! fails open (registration stays reachable when the role store is down) while
//! the `/admin/check` endpoint fails closed (`hasAdmin: false` on any error).

pub mod api;
pub mod cli;
pub mod gateway;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
