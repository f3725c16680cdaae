//! Observability setup for TubeScope services.
//!
//! Provides tracing subscriber configuration and Prometheus metrics export.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with JSON output and env filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// Initialize tracing with human-readable output (for development).
pub fn init_tracing_dev() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize Prometheus metrics exporter.
/// Returns a handle that can render metrics in Prometheus format.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder")
}

/// Common metrics labels.
pub mod labels {
    pub const ENDPOINT: &str = "endpoint";
    pub const PROVIDER: &str = "provider";
}

/// Metric names for the API service.
pub mod api {
    pub const REQUESTS: &str = "api_requests_total";
    pub const REQUEST_DURATION: &str = "api_request_duration_seconds";
    pub const UPSTREAM_DURATION: &str = "api_youtube_fetch_duration_seconds";
    pub const GENERATIONS: &str = "api_content_generations_total";
}
