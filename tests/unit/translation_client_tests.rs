/*!
 * Tests for the translation client
 */

use subvocab::errors::ProviderError;
use subvocab::translation_client::{HttpTranslator, MockTranslator, TranslateResponse, Translator};

/// The client builds even without a key; the key is checked on use
#[tokio::test]
async fn test_translate_withEmptyApiKey_shouldFailAuthentication() {
    let translator = HttpTranslator::new("http://localhost:1/translate", "", "en-ru", 5)
        .expect("client construction should not require a key");

    let result = translator.translate("sunrise").await;
    assert!(matches!(result, Err(ProviderError::AuthenticationError(_))));
}

/// The mock answers every request with its canned translation
#[tokio::test]
async fn test_mock_translator_withAnyWord_shouldReturnCanned() {
    let translator = MockTranslator::new("восход");
    let translation = translator.translate("sunrise").await.unwrap();
    assert_eq!(translation, "восход");
}

/// Response parsing accepts the documented body shape
#[test]
fn test_translate_response_withSuccessBody_shouldDeserialize() {
    let body = r#"{"code": 200, "lang": "en-ru", "text": ["восход"]}"#;
    let response: TranslateResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.text, vec!["восход"]);
}

/// A body without a text array still parses; the empty array is rejected later
#[test]
fn test_translate_response_withMissingText_shouldDefaultEmpty() {
    let body = r#"{"code": 502}"#;
    let response: TranslateResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.code, 502);
    assert!(response.text.is_empty());
}
