//! Error classification for backend calls.

use thiserror::Error;

/// Errors produced by [`super::ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401).
    ///
    /// The session layer treats this specially: a 401 on the current-user
    /// fetch forces a full logout so a stale token cannot linger.
    #[error("{}", message.as_deref().unwrap_or("Unauthorized"))]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx response.
    #[error("{}", message.as_deref().unwrap_or("Request failed"))]
    Api { status: u16, message: Option<String> },

    /// Transport-level failure (connect, DNS, body read, deserialization).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The message the backend supplied, if it supplied one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Api { message, .. } => {
                message.as_deref()
            }
            ApiError::Network(_) => None,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers with `{"detail": ...}`; `error` and `message` keys
/// are accepted as fallbacks for intermediaries.
pub(super) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "error", "message"]
        .iter()
        .find_map(|key| value.get(key))
        .and_then(|v| v.as_str())
        .map(str::to_owned)
}
