//! Chat-completion API client.
//!
//! Encapsulates the single outbound call to the chat-completions endpoint and
//! the extraction of the completion text.

use reqwest::Client;
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::errors::QuipError;

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

pub struct LlmClient {
    api_key: String,
    model: String,
    temperature: f64,
    base_url: String,
}

impl LlmClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model: config
                .openai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            base_url: config
                .openai_base_url
                .clone()
                .unwrap_or_else(|| OPENAI_API_BASE.to_string()),
        }
    }

    pub fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.temperature,
        }
    }

    /// POST the chat request and return the completion text.
    ///
    /// # Errors
    ///
    /// Distinguishes transport failures (`HttpError`), non-success statuses
    /// (`StatusError`, with the response body captured), undecodable bodies
    /// (`ParseError`), and decoded responses with no choices (`ShapeError`).
    pub async fn fetch_completion(
        &self,
        http: &Client,
        prompt: &str,
    ) -> Result<String, QuipError> {
        let request = self.build_request(prompt);
        info!("Requesting chat completion from model {}", self.model);

        let response = http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| QuipError::HttpError(format!("Chat API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(QuipError::StatusError(format!(
                "status {status}: {error_text}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QuipError::HttpError(format!("Failed to read chat response body: {e}")))?;

        let decoded: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| QuipError::ParseError(format!("Failed to decode chat response: {e}")))?;

        extract_content(decoded)
    }
}

/// Pull the completion text out of a decoded response.
pub fn extract_content(response: ChatResponse) -> Result<String, QuipError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| QuipError::ShapeError("chat response contained no choices".to_string()))
}
