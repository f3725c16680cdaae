//! Niche opportunity scoring and difficulty classification.

use tubescope_types::{Difficulty, NicheScore};

/// Weighted niche score in [0, 100].
///
/// `raw = (avg_views / 10000) * 40 + (competition / 100) * 30 + recency`,
/// where recency contributes a flat 30 when the keyword has a recent upload.
/// Non-finite or negative `avg_views` is treated as 0 before weighting, and
/// the rounded result is clamped into [0, 100].
///
/// The difficulty band is classified from the raw input signals, not from
/// the weighted score; the two can disagree (a score of 100 can carry a
/// `hard` label) and both are reported as-is.
pub fn niche_score(avg_views: f64, competition_count: u64, has_recent_upload: bool) -> NicheScore {
    let avg_views = sanitize(avg_views);

    let view_factor = (avg_views / 10_000.0) * 40.0;
    let competition_factor = (competition_count as f64 / 100.0) * 30.0;
    let recency_factor = if has_recent_upload { 30.0 } else { 0.0 };

    let raw = view_factor + competition_factor + recency_factor;
    let score = raw.round().clamp(0.0, 100.0) as u8;

    NicheScore {
        score,
        difficulty: classify_difficulty(competition_count, avg_views),
    }
}

/// Difficulty band from competition and average views alone.
pub fn classify_difficulty(competition_count: u64, avg_views: f64) -> Difficulty {
    let avg_views = sanitize(avg_views);

    if competition_count < 10 && avg_views < 1_000.0 {
        Difficulty::Easy
    } else if competition_count < 50 && avg_views < 10_000.0 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
