//! Raw YouTube Data API v3 response shapes.
//!
//! The platform serializes statistics counts as strings and omits fields
//! freely; everything here is optional and coerced into the normalized
//! [`tubescope_types`] records with explicit defaults (absent or malformed
//! counts become 0, a missing publish time becomes the Unix epoch).

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tubescope_types::{ChannelMeta, VideoRecord};

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: SearchItemId,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub channel_title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnails: Option<Thumbnails>,
    #[serde(default)]
    pub description: String,
}

impl Snippet {
    pub fn thumbnail_url(&self) -> Option<String> {
        self.thumbnails
            .as_ref()
            .and_then(|t| t.default.as_ref())
            .map(|t| t.url.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub statistics: Option<VideoStatistics>,
    pub content_details: Option<ContentDetails>,
}

impl VideoItem {
    /// Normalize into a [`VideoRecord`] with the defaulting rules applied.
    pub fn into_record(self) -> VideoRecord {
        let stats = self.statistics.unwrap_or_default();
        let duration_seconds = self
            .content_details
            .and_then(|d| d.duration)
            .and_then(|d| parse_iso8601_duration(&d));

        let (title, published_at, channel_title, tags, thumbnail_url) = match self.snippet {
            Some(s) => (
                s.title.clone(),
                s.published_at.unwrap_or(DateTime::UNIX_EPOCH),
                s.channel_title.clone(),
                s.tags.clone(),
                s.thumbnail_url(),
            ),
            None => (String::new(), DateTime::UNIX_EPOCH, None, Vec::new(), None),
        };

        VideoRecord {
            id: self.id,
            title,
            published_at,
            view_count: parse_count(stats.view_count.as_deref()),
            like_count: parse_count(stats.like_count.as_deref()),
            comment_count: parse_count(stats.comment_count.as_deref()),
            tags,
            duration_seconds,
            channel_title,
            thumbnail_url,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelsResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelItem {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub statistics: Option<ChannelStatistics>,
    pub content_details: Option<ChannelContentDetails>,
}

impl ChannelItem {
    pub fn uploads_playlist(&self) -> Option<&str> {
        self.content_details
            .as_ref()
            .and_then(|d| d.related_playlists.as_ref())
            .and_then(|p| p.uploads.as_deref())
    }

    pub fn into_meta(self) -> ChannelMeta {
        let stats = self.statistics.unwrap_or_default();
        let (title, description, thumbnail_url) = match &self.snippet {
            Some(s) => (s.title.clone(), s.description.clone(), s.thumbnail_url()),
            None => (String::new(), String::new(), None),
        };

        ChannelMeta {
            id: self.id,
            title,
            description,
            thumbnail_url,
            subscriber_count: parse_count(stats.subscriber_count.as_deref()),
            total_view_count: parse_count(stats.view_count.as_deref()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub subscriber_count: Option<String>,
    pub view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: Option<PlaylistItemSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

/// Coerce a string statistic to a count; absent or malformed values are 0.
pub fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Parse an ISO-8601 duration of the `PT#H#M#S` form into seconds.
///
/// The platform reports video durations this way; anything that doesn't fit
/// the pattern yields `None` rather than an error.
pub fn parse_iso8601_duration(value: &str) -> Option<u64> {
    let rest = value.strip_prefix("PT")?;
    if rest.is_empty() {
        return None;
    }

    let mut seconds: u64 = 0;
    let mut digits = String::new();

    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let n: u64 = digits.parse().ok()?;
        digits.clear();

        match c {
            'H' => seconds += n * 3600,
            'M' => seconds += n * 60,
            'S' => seconds += n,
            _ => return None,
        }
    }

    if digits.is_empty() { Some(seconds) } else { None }
}
