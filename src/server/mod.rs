pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::{CompletionClient, OpenAiClient},
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(client: Arc<dyn CompletionClient>) -> Router {
    Router::new()
        .route("/analyze-image", post(handlers::analyze_image))
        .layer(TraceLayer::new_for_http())
        .with_state(handlers::AppState { client })
}

pub async fn run(config: Config) -> Result<()> {
    let client = OpenAiClient::new(config.llm.clone());
    let app = router(Arc::new(client));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
