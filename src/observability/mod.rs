//! Observability: Prometheus metrics and the request-tracking middleware.

pub mod metrics;
pub mod middleware;

pub use metrics::{ApiMetrics, MetricsError};
pub use middleware::track_api_requests;
