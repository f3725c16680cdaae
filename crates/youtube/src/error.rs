use thiserror::Error;

#[derive(Debug, Error)]
pub enum YouTubeError {
    /// Request rejected before any network call (empty keyword/channel id).
    #[error("invalid request: {0}")]
    InvalidInput(String),

    /// Transport-level failure or undecodable response body.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform answered with a non-success status (quota, bad key, ...).
    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}
