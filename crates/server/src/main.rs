//! Dashboard server entry point.

use anyhow::Context;
use data_core::CachedSource;
use data_spi::DataSource;
use server::config::ServerConfig;
use server::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid configuration")?;
    let addr = config.socket_addr()?;

    // The blocking HTTP client must stay off the async runtime.
    let source = CachedSource::new(config.source.clone());
    let table = tokio::task::spawn_blocking(move || source.load_observations())
        .await
        .context("data loading task failed")?
        .with_context(|| format!("could not load COVID-19 data from {}", config.source.url))?;
    tracing::info!(
        rows = table.len(),
        countries = table.countries().len(),
        "observation table loaded"
    );

    let app = app(AppState::new(table, &config));

    tracing::info!("server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
