use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tubescope_types::{ChannelMeta, VideoRecord};

use crate::config::YouTubeConfig;
use crate::error::YouTubeError;
use crate::wire::{
    ChannelsResponse, PlaylistItemsResponse, SearchResponse, VideosResponse,
};

/// YouTube Data API v3 client.
///
/// Each operation is a one-shot fetch: no retry, no backoff, no caching.
/// Zero results is success with empty data; only transport failures and
/// non-success statuses surface as errors.
#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    config: YouTubeConfig,
}

impl YouTubeClient {
    pub fn new(config: YouTubeConfig) -> Result<Self, YouTubeError> {
        if config.api_key.is_empty() {
            return Err(YouTubeError::Config("API key is empty".to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    /// Search videos for a keyword and fetch their statistics.
    ///
    /// Runs `search.list` for up to `max_results` video ids, then one
    /// `videos.list` batch for statistics/snippet/contentDetails. Records
    /// come back in the statistics response order.
    pub async fn search_videos(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> Result<Vec<VideoRecord>, YouTubeError> {
        let keyword = validated(keyword, "keyword")?;

        let search: SearchResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet".to_string()),
                    ("q", keyword.to_string()),
                    ("type", "video".to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;

        let ids: Vec<String> = search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        if ids.is_empty() {
            return Ok(vec![]);
        }

        self.fetch_video_records(&ids).await
    }

    /// Search video titles only (one `search.list` call, no statistics).
    pub async fn search_titles(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> Result<Vec<String>, YouTubeError> {
        let keyword = validated(keyword, "keyword")?;

        let search: SearchResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet".to_string()),
                    ("q", keyword.to_string()),
                    ("type", "video".to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;

        Ok(search
            .items
            .into_iter()
            .filter_map(|item| item.snippet.map(|s| s.title))
            .collect())
    }

    /// Look up a channel and fetch a window of its most recent uploads.
    ///
    /// Returns `None` when the channel does not exist. A channel without an
    /// uploads playlist yields empty videos, not an error.
    pub async fn channel_uploads(
        &self,
        channel_id: &str,
        window: u32,
    ) -> Result<Option<(ChannelMeta, Vec<VideoRecord>)>, YouTubeError> {
        let channel_id = validated(channel_id, "channel id")?;

        let channels: ChannelsResponse = self
            .get(
                "channels",
                &[
                    ("part", "snippet,statistics,contentDetails".to_string()),
                    ("id", channel_id.to_string()),
                ],
            )
            .await?;

        let Some(channel) = channels.items.into_iter().next() else {
            return Ok(None);
        };

        let Some(playlist_id) = channel.uploads_playlist().map(str::to_string) else {
            return Ok(Some((channel.into_meta(), vec![])));
        };

        let playlist: PlaylistItemsResponse = self
            .get(
                "playlistItems",
                &[
                    ("part", "snippet".to_string()),
                    ("playlistId", playlist_id),
                    ("maxResults", window.to_string()),
                ],
            )
            .await?;

        let ids: Vec<String> = playlist
            .items
            .into_iter()
            .filter_map(|item| item.snippet.and_then(|s| s.resource_id).and_then(|r| r.video_id))
            .collect();

        let videos = if ids.is_empty() {
            vec![]
        } else {
            self.fetch_video_records(&ids).await?
        };

        Ok(Some((channel.into_meta(), videos)))
    }

    /// Publish timestamps of a channel's recent videos, for the heatmap.
    pub async fn upload_timestamps(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<DateTime<Utc>>, YouTubeError> {
        let channel_id = validated(channel_id, "channel id")?;

        let search: SearchResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet".to_string()),
                    ("channelId", channel_id.to_string()),
                    ("type", "video".to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;

        Ok(search
            .items
            .into_iter()
            .filter_map(|item| item.snippet.and_then(|s| s.published_at))
            .collect())
    }

    async fn fetch_video_records(&self, ids: &[String]) -> Result<Vec<VideoRecord>, YouTubeError> {
        let videos: VideosResponse = self
            .get(
                "videos",
                &[
                    ("part", "snippet,statistics,contentDetails".to_string()),
                    ("id", ids.join(",")),
                ],
            )
            .await?;

        Ok(videos
            .items
            .into_iter()
            .map(|item| item.into_record())
            .collect())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<T, YouTubeError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), resource);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(resource = resource, status = status.as_u16(), "YouTube API error");
            return Err(YouTubeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

fn validated<'a>(value: &'a str, what: &str) -> Result<&'a str, YouTubeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(YouTubeError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> YouTubeClient {
        YouTubeClient::new(YouTubeConfig::new("test-key", server.uri())).unwrap()
    }

    fn search_body(ids: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "items": ids.iter().map(|id| serde_json::json!({
                "id": { "videoId": id },
                "snippet": { "title": format!("Title {id}"), "publishedAt": "2023-06-01T12:00:00Z" }
            })).collect::<Vec<_>>()
        })
    }

    fn videos_body(ids: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "items": ids.iter().map(|id| serde_json::json!({
                "id": id,
                "snippet": {
                    "title": format!("Title {id}"),
                    "publishedAt": "2023-06-01T12:00:00Z",
                    "tags": ["rust"]
                },
                "statistics": { "viewCount": "1000", "likeCount": "10", "commentCount": "2" },
                "contentDetails": { "duration": "PT5M" }
            })).collect::<Vec<_>>()
        })
    }

    #[tokio::test]
    async fn search_videos_merges_search_and_statistics() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "rust"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["v1", "v2"])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("id", "v1,v2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&["v1", "v2"])))
            .mount(&server)
            .await;

        let records = client_for(&server).search_videos("rust", 50).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "v1");
        assert_eq!(records[0].view_count, 1000);
        assert_eq!(records[0].duration_seconds, Some(300));
    }

    #[tokio::test]
    async fn search_videos_with_no_results_skips_stats_call() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[])))
            .mount(&server)
            .await;

        // No /videos mock mounted: reaching it would fail the test.
        let records = client_for(&server).search_videos("rare", 50).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn empty_keyword_is_rejected_without_network() {
        let server = MockServer::start().await;
        let result = client_for(&server).search_videos("  ", 50).await;

        assert!(matches!(result, Err(YouTubeError::InvalidInput(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_error_status_is_terminal() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(serde_json::json!({ "error": "quotaExceeded" })),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).search_videos("rust", 50).await;
        match result {
            Err(YouTubeError::Upstream { status, .. }) => assert_eq!(status, 403),
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn channel_uploads_returns_none_for_unknown_channel() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })),
            )
            .mount(&server)
            .await;

        let result = client_for(&server)
            .channel_uploads("UCnothere", 10)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn channel_uploads_walks_the_uploads_playlist() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("id", "UC42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{
                    "id": "UC42",
                    "snippet": { "title": "Chan", "description": "d" },
                    "statistics": { "subscriberCount": "500", "viewCount": "10000" },
                    "contentDetails": { "relatedPlaylists": { "uploads": "UU42" } }
                }]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("playlistId", "UU42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    { "snippet": { "resourceId": { "videoId": "v1" } } },
                    { "snippet": { "resourceId": { "videoId": "v2" } } }
                ]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&["v1", "v2"])))
            .mount(&server)
            .await;

        let (meta, videos) = client_for(&server)
            .channel_uploads("UC42", 10)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(meta.id, "UC42");
        assert_eq!(meta.subscriber_count, 500);
        assert_eq!(videos.len(), 2);
    }

    #[tokio::test]
    async fn upload_timestamps_collects_publish_times() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("channelId", "UC42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["v1", "v2", "v3"])))
            .mount(&server)
            .await;

        let timestamps = client_for(&server)
            .upload_timestamps("UC42", 50)
            .await
            .unwrap();
        assert_eq!(timestamps.len(), 3);
    }
}
