//! Keyword and competitor metrics engine.
//!
//! Every function in this crate is a pure, synchronous computation over
//! already-fetched records. Fetching and persistence live elsewhere; the
//! caller hands in a slice, gets a value back.

pub mod competitor;
pub mod heatmap;
pub mod keywords;
pub mod metrics;
pub mod niche;

pub use self::competitor::build_competitor_report;
pub use self::heatmap::{average_days_between_uploads, build_heatmap};
pub use self::keywords::extract_related;
pub use self::metrics::compute_metrics;
pub use self::niche::{classify_difficulty, niche_score};
