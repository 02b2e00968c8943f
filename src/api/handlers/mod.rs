//! Route handlers for the agendo HTTP surface.

pub mod admin_check;
pub mod health;
pub mod pages;
pub mod reminders;
