//! LLM client configuration
//!
//! One construction point, read from the environment at process start.
//! The resulting config is immutable and shared across all agents by Arc.

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Configuration for the external chat-completions provider.
///
/// `max_iter` / `max_rpm` caps live on each [`crate::agents::AgentSpec`];
/// this struct only carries what is shared by every agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f32,
    pub api_key: String,
    pub base_url: String,
}

impl LlmConfig {
    /// Build from environment variables. `.env` loading is the caller's job.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_MODEL` and `OPENAI_BASE_URL`
    /// fall back to the defaults the original deployment used.
    pub fn from_env() -> crate::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| crate::error::CrewError::Config("OPENAI_API_KEY not set".to_string()))?;

        Ok(Self {
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            api_key,
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Config with an explicit key, for tests and embedding callers.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LlmConfig::with_api_key("test-key");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }
}
