use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};

use quip::core::config::AppConfig;
use quip::features::deliver::WebhookSink;

#[tokio::main]
async fn main() -> Result<()> {
    quip::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {e}");
        e
    })?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    let sink = WebhookSink::new(config.embed_sink_url.clone(), http.clone());

    let datum = quip::run::run(&config, &http, &sink).await.map_err(|e| {
        error!("Run failed: {e}");
        e
    })?;

    info!(
        "Recorded {} bytes under key '{}'",
        datum.value.len(),
        datum.key
    );
    Ok(())
}
