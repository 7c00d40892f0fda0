//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::lifecycle::Lifecycle;
use crate::observability::ApiMetrics;
use crate::service::TodoService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Todo service for all item operations.
    pub todo_service: Arc<TodoService>,
    /// Metrics registry for the request counter and exposition endpoint.
    pub metrics: Arc<ApiMetrics>,
    /// Lifecycle tracker driven by the entry point.
    pub lifecycle: Arc<Lifecycle>,
}
