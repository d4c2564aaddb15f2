pub mod handlers;
pub mod types;

use crate::{Result, config::Config, gemini::GeminiClient};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router over any client implementation, so tests
/// can drive the real routes against a stub upstream.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/recommendations", post(handlers::recommendations))
        .route("/api/chat", post(handlers::chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = GeminiClient::new(config.gemini.clone());
    let state = AppState {
        client: Arc::new(client),
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
