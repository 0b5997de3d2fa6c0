use std::time::Duration;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use super::source::ConfigSource;

/// Endpoint settings for the OpenAI API. The key lives in `CredentialPair`.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
    /// - OPENAI_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_source(source: &ConfigSource) -> Self {
        let timeout = source
            .get("OPENAI_TIMEOUT_SECS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            base_url: source.get_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            timeout,
        }
    }
}
