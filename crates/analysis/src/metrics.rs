//! Aggregate statistics over a sample of videos.

use tubescope_types::{MetricsSummary, VideoRecord};

/// Compute aggregate view/like/comment totals and the average engagement
/// percentage for a sample of videos.
///
/// Engagement is `(likes + comments) / views * 100`. The average is 0 for an
/// empty sample and also when the sample has views summing to zero; the
/// second guard matters because a non-empty sample of zero-view videos would
/// otherwise divide by zero.
pub fn compute_metrics(videos: &[VideoRecord]) -> MetricsSummary {
    let total_views: u64 = videos.iter().map(|v| v.view_count).sum();
    let total_likes: u64 = videos.iter().map(|v| v.like_count).sum();
    let total_comments: u64 = videos.iter().map(|v| v.comment_count).sum();

    let average_engagement_percent = if videos.is_empty() || total_views == 0 {
        0.0
    } else {
        (total_likes + total_comments) as f64 / total_views as f64 * 100.0
    };

    MetricsSummary {
        total_views,
        total_likes,
        total_comments,
        average_engagement_percent,
        video_count: videos.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn video(views: u64, likes: u64, comments: u64) -> VideoRecord {
        VideoRecord {
            id: format!("v{views}"),
            title: "test".to_string(),
            published_at: DateTime::from_timestamp(1700000000, 0).unwrap(),
            view_count: views,
            like_count: likes,
            comment_count: comments,
            tags: vec![],
            duration_seconds: None,
            channel_title: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn empty_sample_is_all_zero() {
        let summary = compute_metrics(&[]);
        assert_eq!(summary, MetricsSummary::empty());
    }

    #[test]
    fn sums_and_engagement_are_computed() {
        let videos = vec![video(1000, 50, 10), video(3000, 150, 40)];
        let summary = compute_metrics(&videos);

        assert_eq!(summary.total_views, 4000);
        assert_eq!(summary.total_likes, 200);
        assert_eq!(summary.total_comments, 50);
        assert_eq!(summary.video_count, 2);
        // (200 + 50) / 4000 * 100 = 6.25
        assert_eq!(summary.average_engagement_percent, 6.25);
    }

    #[test]
    fn zero_views_with_nonzero_count_does_not_divide_by_zero() {
        let videos = vec![video(0, 5, 3), video(0, 2, 1)];
        let summary = compute_metrics(&videos);

        assert_eq!(summary.video_count, 2);
        assert_eq!(summary.total_likes, 7);
        assert_eq!(summary.average_engagement_percent, 0.0);
    }

    #[test]
    fn engagement_is_never_negative() {
        let videos = vec![video(100, 0, 0)];
        let summary = compute_metrics(&videos);
        assert!(summary.average_engagement_percent >= 0.0);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let videos = vec![video(123, 45, 6), video(789, 10, 11), video(0, 0, 0)];
        assert_eq!(compute_metrics(&videos), compute_metrics(&videos));
    }
}
