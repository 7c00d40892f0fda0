//! todo-backend server entry point.
//!
//! Starts the Axum HTTP server once persistence initialization succeeds
//! and drives the lifecycle through draining and teardown when a
//! termination signal arrives.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use todo_backend::api;
use todo_backend::app_state::AppState;
use todo_backend::config::BackendConfig;
use todo_backend::lifecycle::{Lifecycle, Phase, shutdown_signal};
use todo_backend::observability::{ApiMetrics, track_api_requests};
use todo_backend::persistence::PostgresItemStore;
use todo_backend::service::TodoService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = BackendConfig::from_env()?;
    let lifecycle = Arc::new(Lifecycle::new());
    tracing::info!(addr = %config.listen_addr, phase = %lifecycle.current(), "starting todo-backend");

    // Initialize persistence; a failure here aborts startup
    let store = match PostgresItemStore::connect(&config).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "persistence initialization failed");
            return Err(e.into());
        }
    };

    // Build service layer and metrics
    let todo_service = Arc::new(TodoService::new(store));
    let metrics = Arc::new(ApiMetrics::new()?);

    // Build application state
    let app_state = AppState {
        todo_service: Arc::clone(&todo_service),
        metrics: Arc::clone(&metrics),
        lifecycle: Arc::clone(&lifecycle),
    };

    // Build router: API routes first, static files for everything else
    let metrics_layer = Arc::clone(&metrics);
    let app = Router::new()
        .merge(api::build_router())
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn(move |req, next| {
            track_api_requests(Arc::clone(&metrics_layer), req, next)
        }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    lifecycle.advance(Phase::Listening);
    tracing::info!(addr = %config.listen_addr, "server listening");

    let drain_lifecycle = Arc::clone(&lifecycle);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            drain_lifecycle.advance(Phase::Draining);
        })
        .await?;

    // In-flight requests have finished; release persistence. Teardown
    // outcome never blocks process exit.
    todo_service.teardown().await;
    lifecycle.advance(Phase::Stopped);
    tracing::info!("shutdown complete");

    Ok(())
}
