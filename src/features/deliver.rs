//! Embedded-data delivery.
//!
//! The survey platform's embedded-data store is an external collaborator,
//! reached only through the `EmbeddedDataSink` trait.

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::core::models::EmbeddedDatum;
use crate::errors::QuipError;

/// Key under which the completion text is stored.
pub const CHAT_RESULT_KEY: &str = "chat_result";

#[async_trait]
pub trait EmbeddedDataSink: Send + Sync {
    async fn write(&self, datum: &EmbeddedDatum) -> Result<(), QuipError>;
}

/// Sink that forwards each datum as JSON to the configured ingest endpoint.
pub struct WebhookSink {
    url: String,
    http: Client,
}

impl WebhookSink {
    pub fn new(url: String, http: Client) -> Self {
        Self { url, http }
    }
}

#[async_trait]
impl EmbeddedDataSink for WebhookSink {
    async fn write(&self, datum: &EmbeddedDatum) -> Result<(), QuipError> {
        let response = self
            .http
            .post(&self.url)
            .json(datum)
            .send()
            .await
            .map_err(|e| QuipError::SinkError(format!("Embedded-data write failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(QuipError::SinkError(format!(
                "Embedded-data store returned status {status}: {error_text}"
            )));
        }

        info!("Wrote embedded datum under key '{}'", datum.key);
        Ok(())
    }
}
