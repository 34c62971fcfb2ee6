use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const BASE_URL_ENV: &str = "FINVERSE_API_URL";

/// Client configuration for the FinVerse backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Timeout for non-streaming requests.
    pub request_timeout: Duration,
    /// How long the streaming pull loop waits for the next chunk before
    /// giving up on the session.
    pub stream_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            stream_idle_timeout: Duration::from_secs(600),
        }
    }
}

impl ClientConfig {
    /// Defaults with the `FINVERSE_API_URL` environment override applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }
}
