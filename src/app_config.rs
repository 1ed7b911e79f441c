use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path of the persisted vocabulary database
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Words are kept only when their length exceeds this threshold
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Translation service settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Service endpoint URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// API key, sent as a query parameter. Only required when the translate
    /// command is actually used.
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Source-target language pair, e.g. "en-ru"
    #[serde(default = "default_language_pair")]
    pub lang: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            api_key: String::new(),
            lang: default_language_pair(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_database_path() -> String {
    "db.json".to_string()
}

fn default_min_word_length() -> usize {
    2
}

fn default_translation_endpoint() -> String {
    "https://translate.yandex.net/api/v1.5/tr.json/translate".to_string()
}

fn default_language_pair() -> String {
    "en-ru".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Language pair must look like "xx-yy"; the exact codes are opaque
        // to this tool and validated by the service itself
        let mut parts = self.translation.lang.splitn(2, '-');
        let source = parts.next().unwrap_or("");
        let target = parts.next().unwrap_or("");
        if source.is_empty() || target.is_empty() {
            return Err(anyhow!(
                "Invalid language pair '{}', expected the form 'source-target' (e.g. 'en-ru')",
                self.translation.lang
            ));
        }

        if self.database_path.is_empty() {
            return Err(anyhow!("Database path must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: default_database_path(),
            min_word_length: default_min_word_length(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
