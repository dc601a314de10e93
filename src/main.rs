//! todo-gateway server entry point.
//!
//! Starts the Axum HTTP server with the todo REST endpoints and the
//! generated API documentation.

use std::sync::Arc;

use anyhow::Context;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use todo_gateway::api;
use todo_gateway::app_state::AppState;
use todo_gateway::config::{LogFormat, ServerConfig};
use todo_gateway::domain::TodoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting todo-gateway");

    // Build domain layer
    let store = if config.seed_sample_data {
        TodoStore::seeded()
    } else {
        TodoStore::new()
    };
    tracing::info!(items = store.len().await, "todo store ready");

    // Build application state
    let app_state = AppState::new(Arc::new(store));

    // Build router
    let app = api::build_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
