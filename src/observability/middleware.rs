//! Request-tracking middleware for the API surface.

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::metrics::ApiMetrics;

/// Counts API requests by HTTP method.
///
/// Only paths under `/api` are counted. The counter is incremented
/// before the request is routed, so requests that end in an error
/// response are counted the same as successful ones. Static asset and
/// metrics scrape traffic stays out of the counter.
pub async fn track_api_requests(metrics: Arc<ApiMetrics>, request: Request, next: Next) -> Response {
    if request.uri().path().starts_with("/api") {
        metrics.record_api_request(request.method().as_str());
    }
    next.run(request).await
}
