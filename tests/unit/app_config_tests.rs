/*!
 * Tests for application configuration
 */

use subvocab::app_config::{Config, LogLevel};

/// Default config carries the production defaults
#[test]
fn test_default_config_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.database_path, "db.json");
    assert_eq!(config.min_word_length, 2);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.translation.lang, "en-ru");
    assert!(config.translation.api_key.is_empty());
}

/// A default config validates; the API key is not required up front
#[test]
fn test_validate_withDefaultConfig_shouldPass() {
    assert!(Config::default().validate().is_ok());
}

/// A malformed language pair is rejected
#[test]
fn test_validate_withBadLanguagePair_shouldFail() {
    let mut config = Config::default();
    config.translation.lang = "english".to_string();
    assert!(config.validate().is_err());

    config.translation.lang = "en-".to_string();
    assert!(config.validate().is_err());
}

/// An empty database path is rejected
#[test]
fn test_validate_withEmptyDatabasePath_shouldFail() {
    let mut config = Config::default();
    config.database_path = String::new();
    assert!(config.validate().is_err());
}

/// Missing fields in the config file fall back to defaults
#[test]
fn test_deserialize_withPartialJson_shouldUseDefaults() {
    let config: Config = serde_json::from_str(r#"{"min_word_length": 3}"#).unwrap();

    assert_eq!(config.min_word_length, 3);
    assert_eq!(config.database_path, "db.json");
    assert_eq!(config.translation.timeout_secs, 30);
}

/// Config serializes and parses back unchanged
#[test]
fn test_serialize_withRoundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.translation.api_key = "secret".to_string();
    config.min_word_length = 3;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.translation.api_key, "secret");
    assert_eq!(parsed.min_word_length, 3);
}
