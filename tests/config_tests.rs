use std::collections::HashMap;

use quip::core::config::AppConfig;
use quip::errors::QuipError;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn from_map(map: &HashMap<String, String>) -> Result<AppConfig, QuipError> {
    AppConfig::from_lookup(|name| map.get(name).cloned())
}

fn minimal() -> HashMap<String, String> {
    vars(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("EMBED_SINK_URL", "https://example.com/embed"),
    ])
}

#[test]
fn test_minimal_config_applies_defaults() {
    let config = from_map(&minimal()).unwrap();

    assert_eq!(config.openai_api_key, "sk-test");
    assert_eq!(config.embed_sink_url, "https://example.com/embed");
    assert!(config.openai_model.is_none());
    assert!(config.openai_base_url.is_none());
    assert!(config.geocode_base_url.is_none());
    assert!(config.chat_prompt.is_none());
    assert!(config.geo_probe);
}

#[test]
fn test_missing_credential_is_a_config_error() {
    let mut map = minimal();
    map.remove("OPENAI_API_KEY");

    match from_map(&map) {
        Err(QuipError::ConfigError(msg)) => assert!(msg.contains("OPENAI_API_KEY")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_empty_credential_is_a_config_error() {
    let mut map = minimal();
    map.insert("OPENAI_API_KEY".to_string(), "   ".to_string());

    match from_map(&map) {
        Err(QuipError::ConfigError(msg)) => assert!(msg.contains("empty")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_missing_sink_url_is_a_config_error() {
    let mut map = minimal();
    map.remove("EMBED_SINK_URL");

    match from_map(&map) {
        Err(QuipError::ConfigError(msg)) => assert!(msg.contains("EMBED_SINK_URL")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_invalid_sink_url_is_a_config_error() {
    let mut map = minimal();
    map.insert("EMBED_SINK_URL".to_string(), "not a url".to_string());

    match from_map(&map) {
        Err(QuipError::ConfigError(msg)) => assert!(msg.contains("EMBED_SINK_URL")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_invalid_base_url_override_is_a_config_error() {
    let mut map = minimal();
    map.insert("OPENAI_BASE_URL".to_string(), "::nope::".to_string());

    assert!(matches!(from_map(&map), Err(QuipError::ConfigError(_))));
}

#[test]
fn test_geo_probe_flag_parsing() {
    for (raw, expected) in [
        ("1", true),
        ("true", true),
        ("on", true),
        ("yes", true),
        ("0", false),
        ("false", false),
        ("off", false),
        ("no", false),
        ("FALSE", false),
    ] {
        let mut map = minimal();
        map.insert("GEO_PROBE".to_string(), raw.to_string());
        assert_eq!(from_map(&map).unwrap().geo_probe, expected, "raw = {raw}");
    }
}

#[test]
fn test_unrecognized_geo_probe_value_is_a_config_error() {
    let mut map = minimal();
    map.insert("GEO_PROBE".to_string(), "maybe".to_string());

    match from_map(&map) {
        Err(QuipError::ConfigError(msg)) => assert!(msg.contains("GEO_PROBE")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}
