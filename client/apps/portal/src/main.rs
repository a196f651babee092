//! Portal Terminal Client
//!
//! Operations console over the portal services: directory lookups and
//! knowledge-base reads and edits from the terminal. Uses `anyhow`
//! for startup errors; application-level failures travel as
//! `kernel::error::AppError`.
//!
//! Session renewal is automatic. When the session cannot be renewed
//! the command fails and prints the identity-provider entry URL, the
//! terminal equivalent of the browser's redirect to the login page.

use std::env;

use anyhow::Context;
use platform::Url;
use platform::config::ClientConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config_from_env()?;
    tracing::debug!(
        directory = %config.directory_origin,
        knowledge = %config.knowledge_origin,
        "Resolved service origins"
    );

    let args: Vec<String> = env::args().skip(1).collect();
    commands::run(config, &args).await
}

/// Service origins from the environment, falling back to the local
/// development ports
fn config_from_env() -> anyhow::Result<ClientConfig> {
    let defaults = ClientConfig::localhost();
    let directory = origin_override("PORTAL_DIRECTORY_URL")?.unwrap_or(defaults.directory_origin);
    let knowledge = origin_override("PORTAL_KNOWLEDGE_URL")?.unwrap_or(defaults.knowledge_origin);
    Ok(ClientConfig::new(directory, knowledge))
}

fn origin_override(name: &str) -> anyhow::Result<Option<Url>> {
    match env::var(name) {
        Ok(raw) => Url::parse(&raw)
            .map(Some)
            .with_context(|| format!("{name} is not a valid URL: {raw}")),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("{name} is not readable")),
    }
}
