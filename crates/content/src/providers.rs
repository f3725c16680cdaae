//! Individual LLM providers.

use std::env;

use serde::Deserialize;
use tubescope_types::GeneratedContent;

use crate::ContentError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const GEMINI_MODEL: &str = "gemini-pro";
const OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// One hosted LLM provider. An enum rather than trait objects keeps the
/// chain simple: both variants are known at compile time.
#[derive(Debug, Clone)]
pub enum Provider {
    Gemini { api_key: String, base_url: String },
    OpenAi { api_key: String, base_url: String },
}

impl Provider {
    pub fn gemini(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::Gemini {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn openai(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::OpenAi {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn gemini_from_env() -> Option<Self> {
        env::var("GEMINI_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|key| Self::gemini(key, GEMINI_BASE_URL))
    }

    pub fn openai_from_env() -> Option<Self> {
        env::var("OPENAI_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|key| Self::openai(key, OPENAI_BASE_URL))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini { .. } => "gemini",
            Self::OpenAi { .. } => "openai",
        }
    }

    pub(crate) async fn generate(
        &self,
        http: &reqwest::Client,
        keyword: &str,
        tone: &str,
    ) -> Result<GeneratedContent, ContentError> {
        let text = match self {
            Self::Gemini { api_key, base_url } => {
                let url = format!(
                    "{}/models/{}:generateContent",
                    base_url.trim_end_matches('/'),
                    GEMINI_MODEL
                );
                let body = serde_json::json!({
                    "contents": [{ "parts": [{ "text": prompt(keyword, tone) }] }]
                });

                let response = http
                    .post(&url)
                    .query(&[("key", api_key.as_str())])
                    .json(&body)
                    .send()
                    .await?;
                let response = check_status(response).await?;

                let parsed: GeminiResponse = response.json().await?;
                parsed
                    .candidates
                    .into_iter()
                    .next()
                    .and_then(|c| c.content.parts.into_iter().next())
                    .map(|p| p.text)
                    .ok_or_else(|| ContentError::Malformed("empty candidate list".to_string()))?
            }
            Self::OpenAi { api_key, base_url } => {
                let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));
                let body = serde_json::json!({
                    "model": OPENAI_MODEL,
                    "messages": [
                        {
                            "role": "system",
                            "content": "You are a YouTube content optimization expert."
                        },
                        { "role": "user", "content": prompt(keyword, tone) }
                    ]
                });

                let response = http.post(&url).bearer_auth(api_key).json(&body).send().await?;
                let response = check_status(response).await?;

                let parsed: OpenAiResponse = response.json().await?;
                parsed
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .ok_or_else(|| ContentError::Malformed("empty choice list".to_string()))?
            }
        };

        parse_content(&text)
    }
}

fn prompt(keyword: &str, tone: &str) -> String {
    format!(
        "Generate YouTube content for the keyword \"{keyword}\" with a {tone} tone:\n\
         1. Generate 5 catchy titles\n\
         2. Write a compelling description\n\
         3. Suggest 10 relevant SEO tags\n\
         \n\
         Format the response as JSON with the following structure:\n\
         {{\n\
           \"titles\": string[],\n\
           \"description\": string,\n\
           \"tags\": string[]\n\
         }}"
    )
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ContentError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ContentError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse the model's text output as a content document. Models often wrap
/// JSON in markdown fences, so those are stripped first.
fn parse_content(text: &str) -> Result<GeneratedContent, ContentError> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    serde_json::from_str(trimmed).map_err(|e| ContentError::Malformed(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: String,
}
