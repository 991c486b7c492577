pub mod api;
pub mod config;
pub mod errors;

use axum::{
    http::{header, Method},
    routing::post,
    Router,
};
use crate::config::ServerConfig;
use crate::errors::ServerError;
use roster_core::{CreationHandler, RosterResult};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone, Default)]
pub struct AppState {
    pub handler: CreationHandler,
}

impl AppState {
    pub fn new(handler: CreationHandler) -> Self {
        Self { handler }
    }
}

/// Only the configured origin may call the API from a browser.
pub fn cors_layer(config: &ServerConfig) -> RosterResult<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(config.cors_origin()?)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

pub fn router(state: Arc<AppState>, config: &ServerConfig) -> RosterResult<Router> {
    Ok(Router::new()
        .route("/users", post(api::create_user))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config)?),
        )
        .with_state(state))
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state.clone(), config)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!(
        last_issued_id = state.handler.allocator().last_issued(),
        "roster server stopped"
    );
    Ok(())
}
