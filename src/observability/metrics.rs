//! Prometheus metrics registry and the API request counter.
//!
//! [`ApiMetrics`] owns a private [`prometheus::Registry`] created once at
//! startup and passed explicitly to the middleware and the exposition
//! handler. No global registry is consulted.

use std::fmt;

use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};

/// Metrics registration or encoding failure.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// A collector could not be registered.
    #[error("failed to register metric: {0}")]
    Registration(#[from] prometheus::Error),
    /// The registry could not be rendered in the text exposition format.
    #[error("failed to encode metrics: {0}")]
    Encoding(String),
}

/// Process-wide metrics state.
///
/// Holds the request counter labeled by HTTP method plus the process
/// collector on Linux. Counters are monotonically increasing and reset
/// only on process restart.
#[derive(Clone)]
pub struct ApiMetrics {
    registry: Registry,
    api_requests_total: CounterVec,
}

impl ApiMetrics {
    /// Creates the registry and registers all collectors.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Registration`] if a collector cannot be
    /// registered (duplicate metric names, invalid label names).
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let api_requests_total = CounterVec::new(
            Opts::new(
                "api_requests_total",
                "Total number of API requests by HTTP method",
            ),
            &["method"],
        )?;
        registry.register(Box::new(api_requests_total.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            api_requests_total,
        })
    }

    /// Increments the request counter for the given HTTP method.
    ///
    /// Safe for concurrent calls from any number of in-flight requests.
    pub fn record_api_request(&self, method: &str) {
        self.api_requests_total.with_label_values(&[method]).inc();
    }

    /// Renders all registered metric families in the text exposition format.
    ///
    /// Rendering is cheap and uncached; the scrape interval is expected to
    /// be seconds, not milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Encoding`] if the encoder fails or produces
    /// invalid UTF-8.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| MetricsError::Encoding(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| MetricsError::Encoding(e.to_string()))
    }
}

impl fmt::Debug for ApiMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiMetrics").finish_non_exhaustive()
    }
}
