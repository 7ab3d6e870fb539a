//! Client for an OpenAI-style chat-completions API

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LlmConfig;

/// Client for the chat-completions endpoint
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Errors from the chat API, split so callers can tell a bad key apart
#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Chat API authentication failed: {0}")]
    Authentication(String),

    #[error("Chat API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No text content in response")]
    Empty,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

/// Response from the chat-completions API
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error detail from the chat API
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl ChatClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Send a system + user prompt pair, return the trimmed reply
    pub async fn complete(&self, system: &str, user_message: &str) -> Result<String, AiError> {
        let response = self
            .send(vec![Message::system(system), Message::user(user_message)])
            .await?;
        self.extract_text(&response)
    }

    /// Send a full request with messages
    pub async fn send(&self, messages: Vec<Message>) -> Result<ApiResponse, AiError> {
        let request = ApiRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|api_err| api_err.error.message)
                .unwrap_or(body);

            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(AiError::Authentication(message));
            }
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| AiError::Parse(e.to_string()))
    }

    /// First non-empty choice content, trimmed
    pub fn extract_text(&self, response: &ApiResponse) -> Result<String, AiError> {
        response
            .choices
            .iter()
            .filter_map(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(String::from)
            .ok_or(AiError::Empty)
    }
}
