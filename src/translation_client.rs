use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::ProviderError;

// @module: Machine-translation client

/// Seam for fetching a translation of a single word.
///
/// The review session only ever needs "one word in, one string out"; the
/// trait keeps the controller testable without network access.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate a single word or phrase
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;
}

/// Response from the translation service
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    /// Numeric status code reported in the body; 200 means success
    pub code: u16,

    /// Translated text fragments
    #[serde(default)]
    pub text: Vec<String>,
}

/// HTTP client for a key-authenticated translate endpoint.
///
/// One best-effort GET per invocation; any non-success response is raised to
/// the caller. No retries by design.
#[derive(Debug)]
pub struct HttpTranslator {
    /// Service endpoint URL
    endpoint: String,
    /// API key sent as a query parameter
    api_key: String,
    /// Language pair, e.g. "en-ru"
    lang: String,
    /// HTTP client for making requests
    client: Client,
}

impl HttpTranslator {
    /// Create a client for the given endpoint, key and language pair.
    ///
    /// An empty API key is accepted here; it is only rejected when a
    /// translation is actually requested.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        lang: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Ok(HttpTranslator {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            lang: lang.into(),
            client,
        })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "Translation API key is not configured".to_string(),
            ));
        }

        debug!("Requesting translation for '{}'", text);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("text", text),
                ("lang", self.lang.as_str()),
                ("format", "plain"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if body.code != 200 {
            return Err(ProviderError::ApiError {
                status_code: body.code,
                message: "Translation service reported failure".to_string(),
            });
        }

        body.text
            .first()
            .cloned()
            .ok_or_else(|| ProviderError::ParseError("Empty translation text array".to_string()))
    }
}

/// Canned translator for tests and offline runs
#[derive(Debug, Default)]
pub struct MockTranslator {
    /// Translation returned for every request
    pub canned: String,
}

impl MockTranslator {
    /// Create a mock that answers every request with `canned`
    pub fn new(canned: impl Into<String>) -> Self {
        MockTranslator {
            canned: canned.into(),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, _text: &str) -> Result<String, ProviderError> {
        Ok(self.canned.clone())
    }
}
