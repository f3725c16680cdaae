//! Normalized video platform records and report types for TubeScope.
//!
//! Everything here is an immutable value type: records are constructed once
//! per upstream API response and flow through the analysis crate unchanged.
//! Wire names follow the camelCase JSON the product has always served.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fetched video, normalized from the platform's search/list responses.
///
/// Counts default to 0 when the platform omits them; `duration_seconds` is
/// `None` when the platform reports no duration or an unparseable one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Channel metadata from the platform's channel lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMeta {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default)]
    pub total_view_count: u64,
}

/// Aggregate statistics over a list of [`VideoRecord`].
///
/// A pure function of its input list; `average_engagement_percent` is
/// `(likes + comments) / views * 100` and 0 whenever the sample is empty or
/// has zero total views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub average_engagement_percent: f64,
    pub video_count: usize,
}

impl MetricsSummary {
    /// Summary of an empty sample: all zeroes.
    pub fn empty() -> Self {
        Self {
            total_views: 0,
            total_likes: 0,
            total_comments: 0,
            average_engagement_percent: 0.0,
            video_count: 0,
        }
    }
}

/// Discrete difficulty band for a keyword, classified from raw competition
/// and view signals (not from the weighted niche score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Niche opportunity estimate for a keyword or channel.
///
/// `score` is always clamped into [0, 100]. The score and the difficulty
/// band come from unrelated formulas and can disagree; both are reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheScore {
    pub score: u8,
    pub difficulty: Difficulty,
}

/// Keyword-finder result row: volume, competition, and niche estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMetrics {
    pub keyword: String,
    pub volume: u64,
    pub competition: u64,
    pub niche_score: u8,
    pub difficulty: Difficulty,
}

/// Full keyword trend report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub keyword: String,
    pub metrics: MetricsSummary,
    pub niche_score: NicheScore,
    pub related_keywords: Vec<String>,
    pub top_videos: Vec<VideoRecord>,
}

/// A tag and how many sampled videos carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// Posting cadence over a sampled upload window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCadence {
    pub average_days_between_uploads: f64,
}

/// Competitor channel report over a sampled window of recent uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorReport {
    pub channel: ChannelMeta,
    pub metrics: MetricsSummary,
    pub top_categories: Vec<TagCount>,
    pub best_videos: Vec<VideoRecord>,
    pub upload_cadence: UploadCadence,
}

/// Day-of-week x hour-of-day upload activity grid.
///
/// Rows are days (0 = Sunday .. 6 = Saturday), columns are UTC hours 0-23.
/// The sum of all cells equals the number of uploads sampled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTimeHeatmap {
    pub cells: [[u32; 24]; 7],
}

impl UploadTimeHeatmap {
    /// An all-zero grid.
    pub fn zeroed() -> Self {
        Self {
            cells: [[0; 24]; 7],
        }
    }

    /// Total number of uploads counted across all cells.
    pub fn total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }
}

impl Default for UploadTimeHeatmap {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Generated titles/description/tags for a keyword, as returned by an LLM
/// provider. `provider` is filled in by the chain that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    #[serde(default)]
    pub provider: String,
    pub titles: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_video() -> VideoRecord {
        VideoRecord {
            id: "abc123".to_string(),
            title: "My Video".to_string(),
            published_at: DateTime::from_timestamp(1700000000, 0).unwrap(),
            view_count: 1000,
            like_count: 50,
            comment_count: 10,
            tags: vec!["rust".to_string()],
            duration_seconds: Some(933),
            channel_title: Some("My Channel".to_string()),
            thumbnail_url: None,
        }
    }

    #[test]
    fn video_record_serializes_camel_case() {
        let json = serde_json::to_value(sample_video()).unwrap();

        assert_eq!(json["viewCount"], 1000);
        assert_eq!(json["likeCount"], 50);
        assert_eq!(json["commentCount"], 10);
        assert_eq!(json["durationSeconds"], 933);
        assert_eq!(json["channelTitle"], "My Channel");
        assert!(json.get("thumbnailUrl").is_none());
    }

    #[test]
    fn video_record_counts_default_to_zero() {
        let json = r#"{
            "id": "abc",
            "title": "No stats",
            "publishedAt": "2023-06-01T12:00:00Z"
        }"#;

        let video: VideoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(video.view_count, 0);
        assert_eq!(video.like_count, 0);
        assert_eq!(video.comment_count, 0);
        assert!(video.tags.is_empty());
        assert!(video.duration_seconds.is_none());
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Easy).unwrap(),
            "\"easy\""
        );
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(
            serde_json::to_string(&Difficulty::Hard).unwrap(),
            "\"hard\""
        );
    }

    #[test]
    fn difficulty_display_matches_wire_format() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn empty_metrics_summary_is_all_zero() {
        let summary = MetricsSummary::empty();
        assert_eq!(summary.total_views, 0);
        assert_eq!(summary.total_likes, 0);
        assert_eq!(summary.total_comments, 0);
        assert_eq!(summary.average_engagement_percent, 0.0);
        assert_eq!(summary.video_count, 0);
    }

    #[test]
    fn zeroed_heatmap_totals_zero() {
        assert_eq!(UploadTimeHeatmap::zeroed().total(), 0);
    }

    #[test]
    fn heatmap_total_sums_all_cells() {
        let mut heatmap = UploadTimeHeatmap::zeroed();
        heatmap.cells[0][5] = 3;
        heatmap.cells[6][23] = 2;
        assert_eq!(heatmap.total(), 5);
    }

    #[test]
    fn generated_content_parses_without_provider() {
        let json = r#"{
            "titles": ["Title One", "Title Two"],
            "description": "A description",
            "tags": ["seo", "youtube"]
        }"#;

        let content: GeneratedContent = serde_json::from_str(json).unwrap();
        assert!(content.provider.is_empty());
        assert_eq!(content.titles.len(), 2);
        assert_eq!(content.tags.len(), 2);
    }

    #[test]
    fn keyword_metrics_round_trips() {
        let metrics = KeywordMetrics {
            keyword: "rust tutorial".to_string(),
            volume: 50,
            competition: 50,
            niche_score: 72,
            difficulty: Difficulty::Hard,
        };

        let json = serde_json::to_string(&metrics).unwrap();
        let parsed: KeywordMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metrics);
    }
}
