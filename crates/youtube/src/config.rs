use std::env;

use crate::error::YouTubeError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Configuration for the YouTube Data API client.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    /// API key sent as the `key` query parameter on every request.
    pub api_key: String,
    /// Base URL of the Data API; overridable so tests can point the client
    /// at a local mock server.
    pub base_url: String,
}

impl YouTubeConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Load from `YOUTUBE_API_KEY` and optional `YOUTUBE_API_BASE_URL`.
    pub fn from_env() -> Result<Self, YouTubeError> {
        let api_key = env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| YouTubeError::Config("YOUTUBE_API_KEY is not set".to_string()))?;

        let base_url =
            env::var("YOUTUBE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
