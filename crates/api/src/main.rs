use anyhow::{Context, Result};
use itinera_api::{build_app, ApiConfig};
use itinera_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("itinera_api");

    let config = ApiConfig::from_env();
    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(bind = %config.bind, "itinera api started");

    axum::serve(listener, app).await?;
    Ok(())
}
