use anyhow::Context;
use motoflow_server::backend::{create_router, initialize_backend};
use motoflow_server::config::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    // RUST_LOG wins over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    info!("Starting MotoFlow backend");
    let app_state = initialize_backend(&settings).await?;
    let app = create_router(app_state, &settings.allowed_origin);

    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind_address))?;
    info!("Server listening on http://{}", settings.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
