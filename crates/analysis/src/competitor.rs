//! Competitor report assembly.

use tubescope_types::{ChannelMeta, CompetitorReport, TagCount, UploadCadence, VideoRecord};

use crate::heatmap::average_days_between_uploads;
use crate::metrics::compute_metrics;

const TOP_CATEGORY_COUNT: usize = 5;
const BEST_VIDEO_COUNT: usize = 5;

/// Assemble a competitor report from channel metadata and a sampled window
/// of its recent uploads.
///
/// An empty sample is not an error: the report carries zeroed metrics and
/// empty lists, signaling "no data yet" to the caller.
pub fn build_competitor_report(channel: ChannelMeta, videos: &[VideoRecord]) -> CompetitorReport {
    let metrics = compute_metrics(videos);

    // Tag frequencies, flattened across the sample. Insertion order keeps
    // ties stable when sorting by count.
    let mut tag_counts: Vec<(String, u64)> = Vec::new();
    for video in videos {
        for tag in &video.tags {
            match tag_counts.iter_mut().find(|(t, _)| t == tag) {
                Some((_, n)) => *n += 1,
                None => tag_counts.push((tag.clone(), 1)),
            }
        }
    }
    tag_counts.sort_by(|a, b| b.1.cmp(&a.1));
    let top_categories = tag_counts
        .into_iter()
        .take(TOP_CATEGORY_COUNT)
        .map(|(tag, count)| TagCount { tag, count })
        .collect();

    // sort_by is stable, so videos with equal view counts keep their
    // original relative order.
    let mut best_videos = videos.to_vec();
    best_videos.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    best_videos.truncate(BEST_VIDEO_COUNT);

    let timestamps: Vec<_> = videos.iter().map(|v| v.published_at).collect();
    let upload_cadence = UploadCadence {
        average_days_between_uploads: average_days_between_uploads(&timestamps),
    };

    CompetitorReport {
        channel,
        metrics,
        top_categories,
        best_videos,
        upload_cadence,
    }
}
