use std::env;

use url::Url;

use crate::errors::QuipError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    pub embed_sink_url: String,
    pub geocode_base_url: Option<String>,
    pub geo_probe: bool,
    pub chat_prompt: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, QuipError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Tests use this to
    /// avoid mutating process-global environment state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuipError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            openai_api_key: required(&lookup, "OPENAI_API_KEY")?,
            openai_model: lookup("OPENAI_MODEL"),
            openai_base_url: optional_url(&lookup, "OPENAI_BASE_URL")?,
            embed_sink_url: checked_url("EMBED_SINK_URL", required(&lookup, "EMBED_SINK_URL")?)?,
            geocode_base_url: optional_url(&lookup, "GEOCODE_BASE_URL")?,
            geo_probe: bool_flag(&lookup, "GEO_PROBE", true)?,
            chat_prompt: lookup("CHAT_PROMPT"),
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, QuipError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(QuipError::ConfigError(format!("{name} is set but empty"))),
        None => Err(QuipError::ConfigError(format!("{name} is not set"))),
    }
}

fn checked_url(name: &str, value: String) -> Result<String, QuipError> {
    Url::parse(&value)
        .map_err(|e| QuipError::ConfigError(format!("{name} is not a valid URL: {e}")))?;
    Ok(value)
}

fn optional_url<F>(lookup: &F, name: &str) -> Result<Option<String>, QuipError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map(|value| checked_url(name, value)).transpose()
}

fn bool_flag<F>(lookup: &F, name: &str, default: bool) -> Result<bool, QuipError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(true),
            "0" | "false" | "off" | "no" => Ok(false),
            other => Err(QuipError::ConfigError(format!(
                "{name} must be a boolean flag, got '{other}'"
            ))),
        },
    }
}
