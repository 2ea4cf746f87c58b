use serde::{Deserialize, Serialize};

/// A single role/content turn in a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions endpoint.
///
/// Field order matches the wire shape the API documents; everything here is
/// set once from config and constants, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

/// The subset of the chat-completions response we read.
///
/// Unknown fields are ignored; a missing `choices` array decodes as empty and
/// is rejected at extraction time.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// One key/value pair destined for the survey platform's embedded-data store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedDatum {
    pub key: String,
    pub value: String,
}

impl EmbeddedDatum {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
