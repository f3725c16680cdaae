//! YouTube Data API v3 client for TubeScope.
//!
//! Wraps the platform's search/videos/channels/playlistItems endpoints and
//! normalizes their responses into [`tubescope_types`] records. One-shot
//! request/response, no retry or caching; a failed fetch is terminal for
//! that invocation.

mod client;
mod config;
mod error;
mod traits;
pub mod wire;

pub use self::client::YouTubeClient;
pub use self::config::YouTubeConfig;
pub use self::error::YouTubeError;
pub use self::traits::{ChannelQueries, VideoSearch};
