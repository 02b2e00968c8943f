use crate::{api, cli::actions::Action, gateway::GatewayConfig};
use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            auth_timeout_seconds,
            role_timeout_seconds,
        } => {
            // Validate the DSN shape before handing it to the pool.
            let dsn = Url::parse(dsn.expose_secret()).context("invalid database DSN")?;

            let mut config = GatewayConfig::new();
            if let Some(seconds) = auth_timeout_seconds {
                config = config.with_auth_resolve_timeout_seconds(seconds);
            }
            if let Some(seconds) = role_timeout_seconds {
                config = config.with_role_query_timeout_seconds(seconds);
            }

            api::new(port, dsn.as_str(), config.normalize()).await?;
        }
    }

    Ok(())
}
