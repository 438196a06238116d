use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{app, AppState};
use relay_core::RelayConfig;

/// Main entry point for the intake relay.
///
/// Starts the REST server carrying the bot proxy, the webhook endpoints and
/// the call-log dashboard API, with Swagger UI at `/swagger-ui`.
///
/// # Environment Variables
/// - `OPENMIC_API_BASE`: vendor API base URL (default: "https://api.openmic.ai")
/// - `OPENMIC_API_KEY`: vendor bearer token (default: empty)
/// - `RELAY_PUBLIC_URL`: public base URL used to build the webhook URLs
///   handed to the vendor (default: "http://localhost:4000")
/// - `RELAY_ADDR`: listen address (default: "0.0.0.0:4000")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration or startup fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("relay=info".parse()?)
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

    tracing::info!("++ Starting intake relay on {}", cfg.listen_addr());
    tracing::info!("++ Webhook base URL: {}", cfg.public_base_url());
    if cfg.openmic_api_key().is_empty() {
        tracing::warn!("OPENMIC_API_KEY is empty; vendor calls will be unauthenticated");
    }

    let state = AppState::new(cfg);
    let listener = tokio::net::TcpListener::bind(state.cfg.listen_addr()).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
