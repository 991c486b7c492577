use clap::Parser;
use roster_server::{config::ServerConfig, errors::ServerError, serve, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let listener = match tokio::net::TcpListener::bind(&config.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, addr = %config.bind, "failed to bind");
            return Err(e.into());
        }
    };

    tracing::info!(
        "Starting roster server on {} (allowed origin {})",
        listener.local_addr()?,
        config.allowed_origin
    );

    serve(listener, Arc::new(AppState::default()), &config, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for ctrl-c");
    }
    tracing::info!("Shutdown requested");
}
