use serde::{Deserialize, Serialize};

/// Default backend base; all endpoints hang off the `/api` path segment.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend API, including the `/api` path segment.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
