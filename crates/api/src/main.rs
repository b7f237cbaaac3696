use std::sync::Arc;

use anyhow::Context;

use dcclink_api::{app, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    dcclink_observability::init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let bind_addr = config.bind_addr;
    tracing::info!(
        database_url = %config.database_url,
        simulated_latency = ?config.simulated_latency,
        "starting dcclink api"
    );

    let services = Arc::new(
        app::build_services(config)
            .await
            .context("failed to open inventory store")?,
    );

    let router = app::build_app(services.clone());

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    services.shutdown().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
