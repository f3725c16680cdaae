//! API request handlers.
//!
//! Handlers are generic over the video platform and content generator
//! backends, allowing tests to run against mock implementations.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};
use serde::Deserialize;
use tubescope_analysis::{build_competitor_report, build_heatmap, compute_metrics, extract_related, niche_score};
use tubescope_content::{ContentGenerator, ProviderChain};
use tubescope_observability::{api, labels};
use tubescope_types::{KeywordMetrics, KeywordReport, VideoRecord};
use tubescope_youtube::{ChannelQueries, VideoSearch, YouTubeError};

/// Search window for the keyword-finder niche analysis.
const KEYWORD_SEARCH_WINDOW: u32 = 50;
/// Search window for the keyword trend report.
const TREND_SEARCH_WINDOW: u32 = 10;
/// Title sample size for related-keyword extraction.
const RELATED_TITLE_SAMPLE: u32 = 5;
/// Maximum related keywords returned.
const RELATED_KEYWORD_COUNT: usize = 5;
/// Recent-upload window for competitor sampling.
const COMPETITOR_UPLOAD_WINDOW: u32 = 10;
/// Upload sample size for the posting-time heatmap.
const UPLOAD_TIME_SAMPLE: u32 = 50;

/// Application state holding the platform client and content provider chain.
#[derive(Clone)]
pub struct AppState<S, C = ProviderChain>
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    pub youtube: Arc<S>,
    pub content: Arc<C>,
}

impl<S, C> AppState<S, C>
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    pub fn new(youtube: S, content: C) -> Self {
        Self {
            youtube: Arc::new(youtube),
            content: Arc::new(content),
        }
    }
}

/// Health check response.
pub async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Keyword analysis request body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub keyword: String,
}

/// Analyze a keyword: volume, competition, niche score, difficulty.
pub async fn analyze_keyword<S, C>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    let start = Instant::now();
    counter!(api::REQUESTS, labels::ENDPOINT => "analyze_keyword").increment(1);

    let keyword = request.keyword.trim();
    if keyword.is_empty() {
        return bad_request("Missing keyword");
    }

    match state.youtube.search_videos(keyword, KEYWORD_SEARCH_WINDOW).await {
        Ok(videos) => {
            histogram!(api::UPSTREAM_DURATION, labels::ENDPOINT => "analyze_keyword")
                .record(start.elapsed().as_secs_f64());

            let competition = videos.len() as u64;
            let total_views: u64 = videos.iter().map(|v| v.view_count).sum();
            let avg_views = if videos.is_empty() {
                0.0
            } else {
                total_views as f64 / videos.len() as f64
            };
            let niche = niche_score(avg_views, competition, !videos.is_empty());

            let metrics = KeywordMetrics {
                keyword: keyword.to_string(),
                volume: competition,
                competition,
                niche_score: niche.score,
                difficulty: niche.difficulty,
            };

            histogram!(api::REQUEST_DURATION, labels::ENDPOINT => "analyze_keyword")
                .record(start.elapsed().as_secs_f64());
            (
                [(header::CACHE_CONTROL, "no-store")],
                Json(metrics),
            )
                .into_response()
        }
        Err(e) => youtube_error_response(&e, "analyze_keyword"),
    }
}

/// Keyword trends query parameters.
#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    pub keyword: Option<String>,
}

/// Full keyword trend report: metrics, niche score, related keywords,
/// top videos.
pub async fn keyword_trends<S, C>(
    State(state): State<AppState<S, C>>,
    Query(params): Query<TrendsQuery>,
) -> Response
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    let start = Instant::now();
    counter!(api::REQUESTS, labels::ENDPOINT => "keyword_trends").increment(1);

    let Some(keyword) = params.keyword.as_deref().map(str::trim).filter(|k| !k.is_empty())
    else {
        return bad_request("Keyword is required");
    };

    let videos = match state.youtube.search_videos(keyword, TREND_SEARCH_WINDOW).await {
        Ok(videos) => videos,
        Err(e) => return youtube_error_response(&e, "keyword_trends"),
    };
    histogram!(api::UPSTREAM_DURATION, labels::ENDPOINT => "keyword_trends")
        .record(start.elapsed().as_secs_f64());

    // Related keywords come from a separate title sample; a failed sample
    // degrades to an empty list rather than failing the whole report.
    let titles = match state.youtube.search_titles(keyword, RELATED_TITLE_SAMPLE).await {
        Ok(titles) => titles,
        Err(e) => {
            tracing::warn!(error = %e, "Related-keyword title sample failed");
            vec![]
        }
    };

    let report = build_keyword_report(keyword, videos, &titles);

    histogram!(api::REQUEST_DURATION, labels::ENDPOINT => "keyword_trends")
        .record(start.elapsed().as_secs_f64());
    (
        [(header::CACHE_CONTROL, "public, max-age=60")],
        Json(report),
    )
        .into_response()
}

fn build_keyword_report(keyword: &str, mut videos: Vec<VideoRecord>, titles: &[String]) -> KeywordReport {
    let metrics = compute_metrics(&videos);
    let avg_views = if videos.is_empty() {
        0.0
    } else {
        metrics.total_views as f64 / videos.len() as f64
    };
    let niche = niche_score(avg_views, videos.len() as u64, !videos.is_empty());
    let related_keywords = extract_related(keyword, titles, RELATED_KEYWORD_COUNT);

    // Stable sort keeps equal view counts in fetch order.
    videos.sort_by(|a, b| b.view_count.cmp(&a.view_count));

    KeywordReport {
        keyword: keyword.to_string(),
        metrics,
        niche_score: niche,
        related_keywords,
        top_videos: videos,
    }
}

/// Competitor analysis query parameters.
#[derive(Debug, Deserialize)]
pub struct CompetitorQuery {
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
}

/// Competitor channel report over its most recent uploads.
pub async fn competitor_analysis<S, C>(
    State(state): State<AppState<S, C>>,
    Query(params): Query<CompetitorQuery>,
) -> Response
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    let start = Instant::now();
    counter!(api::REQUESTS, labels::ENDPOINT => "competitor_analysis").increment(1);

    let Some(channel_id) = params
        .channel_id
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    else {
        return bad_request("Channel ID is required");
    };

    match state
        .youtube
        .channel_uploads(channel_id, COMPETITOR_UPLOAD_WINDOW)
        .await
    {
        Ok(Some((channel, videos))) => {
            histogram!(api::UPSTREAM_DURATION, labels::ENDPOINT => "competitor_analysis")
                .record(start.elapsed().as_secs_f64());

            let report = build_competitor_report(channel, &videos);

            histogram!(api::REQUEST_DURATION, labels::ENDPOINT => "competitor_analysis")
                .record(start.elapsed().as_secs_f64());
            (
                [(header::CACHE_CONTROL, "public, max-age=60")],
                Json(report),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            [(header::CACHE_CONTROL, "no-store")],
            Json(serde_json::json!({ "error": "Channel not found" })),
        )
            .into_response(),
        Err(e) => youtube_error_response(&e, "competitor_analysis"),
    }
}

/// Upload-times path parameters.
#[derive(Debug, Deserialize)]
pub struct ChannelPath {
    pub id: String,
}

/// Day-of-week x hour-of-day upload activity heatmap for a channel.
pub async fn upload_times<S, C>(
    State(state): State<AppState<S, C>>,
    Path(params): Path<ChannelPath>,
) -> Response
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    let start = Instant::now();
    counter!(api::REQUESTS, labels::ENDPOINT => "upload_times").increment(1);

    match state
        .youtube
        .upload_timestamps(&params.id, UPLOAD_TIME_SAMPLE)
        .await
    {
        Ok(timestamps) => {
            histogram!(api::UPSTREAM_DURATION, labels::ENDPOINT => "upload_times")
                .record(start.elapsed().as_secs_f64());

            let heatmap = build_heatmap(&timestamps);

            histogram!(api::REQUEST_DURATION, labels::ENDPOINT => "upload_times")
                .record(start.elapsed().as_secs_f64());
            (
                [(header::CACHE_CONTROL, "public, max-age=60")],
                Json(heatmap),
            )
                .into_response()
        }
        Err(e) => youtube_error_response(&e, "upload_times"),
    }
}

/// Content generation request body.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub tone: String,
}

/// Generate titles/description/tags for a keyword via the provider chain.
pub async fn generate_content<S, C>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<GenerateRequest>,
) -> Response
where
    S: VideoSearch + ChannelQueries + Clone + Send + Sync + 'static,
    C: ContentGenerator + Clone + Send + Sync + 'static,
{
    let start = Instant::now();
    counter!(api::REQUESTS, labels::ENDPOINT => "generate_content").increment(1);

    let keyword = request.keyword.trim();
    let tone = request.tone.trim();
    if keyword.is_empty() || tone.is_empty() {
        return bad_request("Missing required fields");
    }

    match state.content.generate(keyword, tone).await {
        Ok(content) => {
            counter!(api::GENERATIONS, labels::PROVIDER => content.provider.clone()).increment(1);
            histogram!(api::REQUEST_DURATION, labels::ENDPOINT => "generate_content")
                .record(start.elapsed().as_secs_f64());
            (
                [(header::CACHE_CONTROL, "no-store")],
                Json(content),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Content generation failed");
            (
                StatusCode::BAD_GATEWAY,
                [(header::CACHE_CONTROL, "no-store")],
                Json(serde_json::json!({ "error": "Content generation failed" })),
            )
                .into_response()
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CACHE_CONTROL, "no-store")],
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

fn youtube_error_response(error: &YouTubeError, endpoint: &str) -> Response {
    match error {
        YouTubeError::InvalidInput(message) => bad_request(message),
        _ => {
            tracing::error!(error = %error, endpoint = endpoint, "YouTube fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                [(header::CACHE_CONTROL, "no-store")],
                Json(serde_json::json!({ "error": "Upstream video platform error" })),
            )
                .into_response()
        }
    }
}
