//! TubeScope REST API Server
//!
//! Serves keyword analysis, competitor reports, upload-time heatmaps, and
//! content generation endpoints.

use std::env;

use tubescope_api::{AppState, AuthConfig, create_router};
use tubescope_content::ProviderChain;
use tubescope_observability::init_tracing_dev;
use tubescope_youtube::{YouTubeClient, YouTubeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing_dev();

    let youtube_config = YouTubeConfig::from_env()?;
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // Load auth config from environment (optional)
    let auth_config = AuthConfig::from_env();
    if auth_config.is_some() {
        tracing::info!("API authentication enabled");
    } else {
        tracing::warn!("API authentication disabled - set API_TOKEN to enable");
    }

    let content = ProviderChain::from_env();
    if content.is_empty() {
        tracing::warn!(
            "No content providers configured - set GEMINI_API_KEY or OPENAI_API_KEY to enable \
             content generation"
        );
    } else {
        tracing::info!(providers = ?content.provider_names(), "Content providers configured");
    }

    tracing::info!(
        youtube_base_url = %youtube_config.base_url,
        bind_addr = %bind_addr,
        "Starting API server"
    );

    // Initialize metrics
    let metrics_handle = tubescope_observability::init_metrics();

    let youtube = YouTubeClient::new(youtube_config)?;

    let state = AppState::new(youtube, content);
    let app = create_router(state, metrics_handle, auth_config);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
