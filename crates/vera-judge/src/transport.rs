//! Judge transports.
//!
//! [`JudgeTransport`] is the seam between prompt construction and the wire.
//! [`OpenAiTransport`] speaks the OpenAI-compatible chat completions API;
//! tests plug in canned transports.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vera_config::JudgeConfig;

use crate::error::JudgeError;
use crate::http::check_response;

/// Provider-neutral completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Sends one completion request and returns the assistant's text.
#[async_trait]
pub trait JudgeTransport: Send + Sync {
    async fn complete(&self, request: &JudgeRequest) -> Result<String, JudgeError>;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

/// `POST {base_url}/chat/completions` with bearer auth.
pub struct OpenAiTransport {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for OpenAiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTransport")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenAiTransport {
    /// Build a transport from judge configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError::NotConfigured`] without an API key, or
    /// [`JudgeError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &JudgeConfig) -> Result<Self, JudgeError> {
        if !config.is_configured() {
            return Err(JudgeError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("vera/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.trim().to_string(),
        })
    }
}

#[async_trait]
impl JudgeTransport for OpenAiTransport {
    async fn complete(&self, request: &JudgeRequest) -> Result<String, JudgeError> {
        let body = ChatCompletionRequest {
            model: &request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let envelope: ChatCompletionResponse = check_response(resp).await?.json().await?;

        envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| JudgeError::Envelope("no message content in first choice".into()))
    }
}
