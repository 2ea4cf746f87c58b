//! quip - fetches a chat-completion one-liner and records it as survey
//! embedded data.
//!
//! The binary wires three pieces together:
//! 1. An optional geocoding connectivity probe whose result is logged and
//!    discarded
//! 2. A chat-completion fetch against the OpenAI API
//! 3. A single embedded-data write to the survey platform's ingest endpoint
//!
//! The probe can never influence the recorded value; the completion text only
//! exists as the return value of an awaited call, so there is no window in
//! which a stale value can be read.
//!
//! # Example
//!
//! ```no_run
//! use quip::core::config::AppConfig;
//! use quip::features::deliver::WebhookSink;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     quip::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let http = reqwest::Client::new();
//!     let sink = WebhookSink::new(config.embed_sink_url.clone(), http.clone());
//!
//!     let datum = quip::run::run(&config, &http, &sink).await?;
//!     println!("recorded {} bytes under '{}'", datum.value.len(), datum.key);
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod run;

pub use errors::QuipError;

/// Configure structured logging. Call once at the start of the binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
