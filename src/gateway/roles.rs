//! Role model and the role-store boundary.
//!
//! Roles are a closed enumeration matched exhaustively at the store boundary;
//! an unknown string in a user record is an error, not a silently non-admin
//! user. The store itself is read-only from the gateway's perspective.

use anyhow::{bail, Context, Result};
use sqlx::{PgPool, Row};
use std::{future::Future, pin::Pin};
use tracing::Instrument;
use uuid::Uuid;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Customer,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Customer => "customer",
        }
    }

    /// Parse a role column value.
    ///
    /// # Errors
    /// Returns an error for values outside the closed role set.
    pub fn from_db(value: &str) -> Result<Self> {
        match value {
            "administrator" => Ok(Self::Administrator),
            "customer" => Ok(Self::Customer),
            other => bail!("unknown role in user record: {other}"),
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Administrator)
    }
}

/// Read-only role queries consumed by the gateway.
pub trait RoleStore: Send + Sync {
    /// Does at least one user record hold the administrator role?
    fn admin_exists(&self) -> BoxFuture<'_, Result<bool>>;

    /// Role recorded for a user, if the user exists.
    fn role_of(&self, user_id: Uuid) -> BoxFuture<'_, Result<Option<Role>>>;
}

/// Postgres-backed role store.
pub struct PgRoleStore {
    pool: PgPool,
}

impl PgRoleStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RoleStore for PgRoleStore {
    fn admin_exists(&self) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move {
            // Existence query: the planner stops at the first matching row.
            let query = "SELECT EXISTS(SELECT 1 FROM users WHERE role = $1) AS present";
            let span = tracing::info_span!(
                "db.query",
                db.system = "postgresql",
                db.operation = "SELECT",
                db.statement = query
            );
            let row = sqlx::query(query)
                .bind(Role::Administrator.as_str())
                .fetch_one(&self.pool)
                .instrument(span)
                .await
                .context("failed to check administrator existence")?;
            Ok(row.get("present"))
        })
    }

    fn role_of(&self, user_id: Uuid) -> BoxFuture<'_, Result<Option<Role>>> {
        Box::pin(async move {
            let query = "SELECT role::text AS role FROM users WHERE id = $1 LIMIT 1";
            let span = tracing::info_span!(
                "db.query",
                db.system = "postgresql",
                db.operation = "SELECT",
                db.statement = query
            );
            let row = sqlx::query(query)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .instrument(span)
                .await
                .context("failed to lookup user role")?;

            row.map(|row| Role::from_db(row.get::<String, _>("role").as_str()))
                .transpose()
        })
    }
}
