use std::net::SocketAddr;
use anyhow::Context;
use cleanpro_api::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cleanpro_api=debug,cleanpro_store=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cleanpro_store::Config::load().context("Failed to load config")?;
    config.pricing.validate().context("Invalid pricing configuration")?;
    tracing::info!("Starting {} booking API on port {}", config.business.name, config.server.port);

    let app_state = AppState::from_config(&config);
    let app = app(app_state);

    let ip = config.server.host.parse().context("Invalid server host")?;
    let addr = SocketAddr::new(ip, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
