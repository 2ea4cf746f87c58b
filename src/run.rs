//! Orchestration: probe, fetch, deliver.

use reqwest::Client;
use tracing::{info, warn};

use crate::clients::geo_client::GeoProbe;
use crate::clients::llm_client::LlmClient;
use crate::core::config::AppConfig;
use crate::core::models::EmbeddedDatum;
use crate::errors::QuipError;
use crate::features::deliver::{CHAT_RESULT_KEY, EmbeddedDataSink};
use crate::prompt;

/// Run the probe, fetch the completion, and record it as embedded data.
///
/// The probe result is logged and discarded. Only the chat completion reaches
/// the sink, and the sink is written exactly once, after the fetch resolves.
pub async fn run(
    config: &AppConfig,
    http: &Client,
    sink: &dyn EmbeddedDataSink,
) -> Result<EmbeddedDatum, QuipError> {
    if config.geo_probe {
        let probe = GeoProbe::new(config);
        match probe.probe(http).await {
            Ok(report) => info!(
                "Geocoding probe returned status {} ({} bytes)",
                report.status, report.body_bytes
            ),
            Err(e) => warn!("Geocoding probe failed: {e}"),
        }
    }

    let client = LlmClient::new(config);
    let prompt_text = prompt::resolve_prompt(config.chat_prompt.as_deref());
    let content = client.fetch_completion(http, &prompt_text).await?;

    let datum = EmbeddedDatum::new(CHAT_RESULT_KEY, content);
    sink.write(&datum).await?;

    Ok(datum)
}
