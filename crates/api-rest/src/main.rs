//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the relay's REST surface on its own.
//!
//! ## Intended use
//! Useful for development and debugging when only the HTTP service is
//! wanted; the workspace's main `relay-run` binary is the normal entry
//! point and serves the same application.

use api_rest::{app, AppState};
use relay_core::RelayConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RelayConfig::new(
        std::env::var("OPENMIC_API_BASE").unwrap_or_else(|_| "https://api.openmic.ai".into()),
        std::env::var("OPENMIC_API_KEY").unwrap_or_default(),
        std::env::var("RELAY_PUBLIC_URL").unwrap_or_else(|_| "http://localhost:4000".into()),
        std::env::var("RELAY_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".into()),
    )?;

    tracing::info!("-- Starting intake relay REST API on {}", cfg.listen_addr());
    if cfg.openmic_api_key().is_empty() {
        tracing::warn!("OPENMIC_API_KEY is empty; vendor calls will be unauthenticated");
    }

    let state = AppState::new(cfg);
    let listener = tokio::net::TcpListener::bind(state.cfg.listen_addr()).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
