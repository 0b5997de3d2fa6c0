mod api;
mod config;
mod page;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Quickask entry point
///
/// Loads credentials once, wires the completion pipeline and serves the
/// question page plus the JSON API:
/// - config/: `.env` + environment, credentials, server, CORS, OpenAI endpoint
/// - setup/: dependency injection and server setup
/// - api/: OpenAPI routes and DTOs
/// - page/: HTML question form
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load configuration; missing credentials halt startup
    let config = AppConfig::load().inspect_err(|err| tracing::error!("{err}"))?;

    // 3. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 4. Run server
    Server::run(config, container).await?;

    Ok(())
}
