//! Upload-time bucketing and posting cadence.
//!
//! All bucketing is done in UTC. The platform timestamps are absolute, so a
//! fixed timezone keeps the grid identical no matter where the service runs.

use chrono::{DateTime, Datelike, Timelike, Utc};
use tubescope_types::UploadTimeHeatmap;

/// Bucket publish timestamps into a 7x24 day-of-week x hour-of-day grid.
///
/// Day 0 is Sunday. The sum of all cells equals the number of timestamps.
pub fn build_heatmap(publish_timestamps: &[DateTime<Utc>]) -> UploadTimeHeatmap {
    let mut heatmap = UploadTimeHeatmap::zeroed();

    for ts in publish_timestamps {
        let day = ts.weekday().num_days_from_sunday() as usize;
        let hour = ts.hour() as usize;
        heatmap.cells[day][hour] += 1;
    }

    heatmap
}

/// Average days between uploads over a sampled window.
///
/// `(max - min) / 86400 / (n - 1)` for n > 1, else 0. The timestamps do not
/// need to be sorted.
pub fn average_days_between_uploads(publish_timestamps: &[DateTime<Utc>]) -> f64 {
    if publish_timestamps.len() < 2 {
        return 0.0;
    }

    let (min, max) = publish_timestamps
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), ts| {
            let t = ts.timestamp();
            (lo.min(t), hi.max(t))
        });

    (max - min) as f64 / 86_400.0 / (publish_timestamps.len() - 1) as f64
}
