//! Chat-completions client for the external LLM provider
//!
//! Uses a long-lived reqwest::Client for connection pooling. Every failure
//! here is an [`CrewError::UpstreamModel`]: nothing is retried locally, the
//! error propagates to the caller unchanged.

use crate::config::LlmConfig;
use crate::error::CrewError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Reusable chat-completions client (connection-pooled)
pub struct LlmClient {
    client: Client,
    config: Arc<LlmConfig>,
}

impl LlmClient {
    pub fn new(config: Arc<LlmConfig>) -> crate::Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(CrewError::Http)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Arc<LlmConfig> {
        &self.config
    }

    /// Run one system + user exchange and return the model's text.
    pub async fn complete(&self, system: &str, user: &str) -> crate::Result<String> {
        if self.config.api_key.is_empty() {
            return Err(CrewError::UpstreamModel(
                "API key not configured".to_string(),
            ));
        }

        let url = format!("{}/chat/completions", self.config.base_url);

        let request = ChatRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        info!(model = %self.config.model, "Calling chat completions API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Chat completions request failed: {}", e);
                CrewError::UpstreamModel(format!("request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Chat completions error response: {}", error_text);
            return Err(CrewError::UpstreamModel(format!(
                "provider returned {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!("Failed to parse chat completions response: {}", e);
            CrewError::UpstreamModel(format!("response parse error: {}", e))
        })?;

        let choice = chat_response.choices.into_iter().next().ok_or_else(|| {
            CrewError::UpstreamModel("no choices in provider response".to_string())
        })?;

        if let Some(usage) = chat_response.usage {
            info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Model response received"
            );
        }

        Ok(choice.message.content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "What is a balance sheet?".to_string(),
            }],
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("gpt-3.5-turbo"));
        assert!(json.contains("What is a balance sheet?"));
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "An overview of assets."}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 5}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "An overview of assets.");
        assert_eq!(parsed.usage.as_ref().unwrap().prompt_tokens, 12);
    }

    #[tokio::test]
    async fn test_empty_api_key_fails_fast() {
        let config = Arc::new(LlmConfig::with_api_key(""));
        let client = LlmClient::new(config).unwrap();

        let err = client.complete("system", "user").await.unwrap_err();
        assert!(matches!(err, CrewError::UpstreamModel(_)));
    }
}
