//! LLM content generation for TubeScope.
//!
//! A [`ProviderChain`] holds an ordered list of providers and tries each in
//! sequence; the first success short-circuits and the last error surfaces
//! when every provider fails. There is no retry within a provider.

mod providers;

use std::future::Future;

use thiserror::Error;
use tubescope_types::GeneratedContent;

pub use self::providers::Provider;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no content providers configured")]
    NoProviders,

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("provider returned malformed content: {0}")]
    Malformed(String),
}

/// Something that can turn a keyword and tone into generated content.
///
/// Abstracted so API handlers can be tested without any provider traffic.
pub trait ContentGenerator: Send + Sync {
    fn generate(
        &self,
        keyword: &str,
        tone: &str,
    ) -> impl Future<Output = Result<GeneratedContent, ContentError>> + Send;
}

/// Ordered provider fallback chain.
#[derive(Clone)]
pub struct ProviderChain {
    http: reqwest::Client,
    providers: Vec<Provider>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            providers,
        }
    }

    /// Build the chain from `GEMINI_API_KEY` / `OPENAI_API_KEY`, in that
    /// priority order. Providers without a key are simply left out.
    pub fn from_env() -> Self {
        let mut providers = Vec::new();
        if let Some(p) = Provider::gemini_from_env() {
            providers.push(p);
        }
        if let Some(p) = Provider::openai_from_env() {
            providers.push(p);
        }
        Self::new(providers)
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl ContentGenerator for ProviderChain {
    async fn generate(&self, keyword: &str, tone: &str) -> Result<GeneratedContent, ContentError> {
        if self.providers.is_empty() {
            return Err(ContentError::NoProviders);
        }

        let mut last_error = ContentError::NoProviders;

        for provider in &self.providers {
            match provider.generate(&self.http, keyword, tone).await {
                Ok(mut content) => {
                    content.provider = provider.name().to_string();
                    return Ok(content);
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        "Content provider failed, trying next"
                    );
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
