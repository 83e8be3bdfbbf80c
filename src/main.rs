mod agent;
mod config;
mod error;
mod relay;
mod routes;
mod state;
mod translate;
mod utils;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cobot_backend=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load()?;
    info!(
        "Loaded configuration: ai_api={}, translate_api={}",
        config.relay.ai_endpoint().unwrap_or("<unset>"),
        config.relay.translate_endpoint().unwrap_or("<unset>")
    );

    let app_state = AppState::new(config.clone())?;
    let app = routes::create_app(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
