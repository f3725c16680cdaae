//! Router configuration for the API.

use axum::{
    Extension, Router,
    http::header,
    middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tubescope_content::ContentGenerator;
use tubescope_youtube::{ChannelQueries, VideoSearch};

use crate::auth::{AuthConfig, require_auth};
use crate::handlers::{
    AppState, analyze_keyword, competitor_analysis, generate_content, health, keyword_trends,
    upload_times,
};

/// Create the API router with the given backends and metrics handle.
///
/// If `auth_config` is `Some`, bearer token authentication will be required
/// for all `/api/*` endpoints. The `/health` and `/metrics` endpoints remain
/// public for monitoring purposes.
pub fn create_router<S, C>(
    state: AppState<S, C>,
    metrics_handle: PrometheusHandle,
    auth_config: Option<AuthConfig>,
) -> Router
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    // Public routes (no auth required)
    let public_routes = Router::new().route("/health", get(health)).route(
        "/metrics",
        get(move || async move {
            (
                [(header::CACHE_CONTROL, "no-store")],
                metrics_handle.render(),
            )
        }),
    );

    // Protected API routes
    let api_routes = Router::new()
        .route("/api/keywords/analyze", post(analyze_keyword::<S, C>))
        .route("/api/keywords/trends", get(keyword_trends::<S, C>))
        .route("/api/competitors/analysis", get(competitor_analysis::<S, C>))
        .route("/api/channels/{id}/upload-times", get(upload_times::<S, C>))
        .route("/api/content/generate", post(generate_content::<S, C>));

    // Apply auth middleware only if auth is configured
    let api_routes = if let Some(config) = auth_config {
        api_routes
            .layer(middleware::from_fn(require_auth))
            .layer(Extension(config))
    } else {
        api_routes
    };

    public_routes
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create a router for testing without the metrics endpoint. Auth wiring
/// matches production so the middleware itself can be exercised.
#[cfg(test)]
pub fn create_test_router<S, C>(state: AppState<S, C>, auth_config: Option<AuthConfig>) -> Router
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    let api_routes = Router::new()
        .route("/api/keywords/analyze", post(analyze_keyword::<S, C>))
        .route("/api/keywords/trends", get(keyword_trends::<S, C>))
        .route("/api/competitors/analysis", get(competitor_analysis::<S, C>))
        .route("/api/channels/{id}/upload-times", get(upload_times::<S, C>))
        .route("/api/content/generate", post(generate_content::<S, C>));

    let api_routes = if let Some(config) = auth_config {
        api_routes
            .layer(middleware::from_fn(require_auth))
            .layer(Extension(config))
    } else {
        api_routes
    };

    Router::new()
        .route("/health", get(health))
        .merge(api_routes)
        .with_state(state)
}
