//! Bearer token authentication middleware.

use axum::{
    Json,
    body::Body,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

/// Configuration for bearer token authentication.
#[derive(Clone)]
pub struct AuthConfig {
    /// The expected bearer token value.
    token: String,
}

impl AuthConfig {
    /// Create a new auth config with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Create auth config from the API_TOKEN environment variable.
    ///
    /// Returns `None` if the environment variable is not set or is empty.
    pub fn from_env() -> Option<Self> {
        std::env::var("API_TOKEN")
            .ok()
            .filter(|s| !s.is_empty())
            .map(Self::new)
    }

    /// Validate a bearer token against the configured token.
    pub fn validate(&self, token: &str) -> bool {
        // Constant-time comparison; the length check leaks only the token
        // length, which is not secret.
        let a = token.as_bytes();
        let b = self.token.as_bytes();

        a.len() == b.len() && a.ct_eq(b).into()
    }
}

/// Extract bearer token from Authorization header.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Authentication middleware that validates bearer tokens.
///
/// Checks for a valid `Authorization: Bearer <token>` header and rejects
/// requests that don't carry one.
pub async fn require_auth(headers: HeaderMap, request: Request<Body>, next: Next) -> Response {
    let auth_config = request
        .extensions()
        .get::<AuthConfig>()
        .expect("AuthConfig not found in request extensions");

    match extract_bearer_token(&headers) {
        Some(token) if auth_config.validate(token) => next.run(request).await,
        Some(_) => unauthorized_response("Invalid token"),
        None => unauthorized_response("Missing authorization header"),
    }
}

/// Generate a 401 Unauthorized response with a JSON error body.
fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
