//! Traits for abstracting the YouTube Data API.
//!
//! API handlers are generic over these so tests can run against in-memory
//! mocks instead of the real platform.

use std::future::Future;

use chrono::{DateTime, Utc};
use tubescope_types::{ChannelMeta, VideoRecord};

use crate::client::YouTubeClient;
use crate::error::YouTubeError;

/// Keyword-driven video search.
pub trait VideoSearch: Send + Sync {
    /// Search videos for a keyword, statistics included.
    fn search_videos(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<VideoRecord>, YouTubeError>> + Send;

    /// Search video titles only (no statistics fetch).
    fn search_titles(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<String>, YouTubeError>> + Send;
}

/// Channel lookups and upload sampling.
pub trait ChannelQueries: Send + Sync {
    /// Channel metadata plus a window of its most recent uploads.
    /// `None` when the channel does not exist.
    fn channel_uploads(
        &self,
        channel_id: &str,
        window: u32,
    ) -> impl Future<Output = Result<Option<(ChannelMeta, Vec<VideoRecord>)>, YouTubeError>> + Send;

    /// Publish timestamps of recent uploads.
    fn upload_timestamps(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<DateTime<Utc>>, YouTubeError>> + Send;
}

impl VideoSearch for YouTubeClient {
    async fn search_videos(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> Result<Vec<VideoRecord>, YouTubeError> {
        self.search_videos(keyword, max_results).await
    }

    async fn search_titles(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> Result<Vec<String>, YouTubeError> {
        self.search_titles(keyword, max_results).await
    }
}

impl ChannelQueries for YouTubeClient {
    async fn channel_uploads(
        &self,
        channel_id: &str,
        window: u32,
    ) -> Result<Option<(ChannelMeta, Vec<VideoRecord>)>, YouTubeError> {
        self.channel_uploads(channel_id, window).await
    }

    async fn upload_timestamps(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<DateTime<Utc>>, YouTubeError> {
        self.upload_timestamps(channel_id, max_results).await
    }
}
