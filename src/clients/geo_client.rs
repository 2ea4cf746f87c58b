//! Geocoding connectivity probe.
//!
//! One GET against the public zippopotam.us API. The report is logged by the
//! caller and discarded; nothing downstream may consume it.

use reqwest::Client;

use crate::core::config::AppConfig;
use crate::errors::QuipError;

pub const GEOCODE_API_BASE: &str = "https://zippopotam.us";
pub const PROBE_STATE: &str = "TX";
pub const PROBE_CITY: &str = "Dallas";

/// Outcome of the probe. Any HTTP status counts as a completed probe; only
/// transport failures are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub status: u16,
    pub body_bytes: usize,
}

pub struct GeoProbe {
    base_url: String,
}

impl GeoProbe {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config
                .geocode_base_url
                .clone()
                .unwrap_or_else(|| GEOCODE_API_BASE.to_string()),
        }
    }

    pub fn probe_url(&self) -> String {
        format!("{}/US/{}/{}", self.base_url, PROBE_STATE, PROBE_CITY)
    }

    pub async fn probe(&self, http: &Client) -> Result<ProbeReport, QuipError> {
        let response = http
            .get(self.probe_url())
            .send()
            .await
            .map_err(|e| QuipError::HttpError(format!("Geocoding probe failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| QuipError::HttpError(format!("Failed to read geocoding body: {e}")))?;

        Ok(ProbeReport {
            status,
            body_bytes: body.len(),
        })
    }
}
