//! Quiz API client module
//!
//! Encapsulates the single outbound call made by the quiz proxy.

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, Request};
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::core::config::AppConfig;
use crate::errors::QuizError;

pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const QUESTION_LIMIT: u32 = 1;

/// Anything that can produce a quiz payload for the proxy handler.
#[async_trait]
pub trait QuizSource: Send + Sync {
    async fn fetch_questions(&self) -> Result<Value, QuizError>;
}

/// Quiz API client backed by `reqwest`.
pub struct QuizClient {
    http: Client,
    url: Url,
    api_key: Option<HeaderValue>,
}

impl QuizClient {
    /// Builds a client for the configured upstream.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::ConfigError` when the upstream URL is not an
    /// http(s) URL or the token cannot be sent as a header value.
    pub fn new(config: &AppConfig) -> Result<Self, QuizError> {
        let http = Client::builder().build().map_err(|e| {
            QuizError::HttpError(format!("Failed to build quiz API HTTP client: {e}"))
        })?;
        Self::with_http(http, config)
    }

    /// Like [`QuizClient::new`], but sends through the given `reqwest` client.
    ///
    /// # Errors
    ///
    /// Same as [`QuizClient::new`].
    pub fn with_http(http: Client, config: &AppConfig) -> Result<Self, QuizError> {
        let url = Url::parse(&config.quiz_api_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(QuizError::ConfigError(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        let api_key = config
            .quiz_api_token
            .as_deref()
            .map(api_key_header)
            .transpose()?;

        Ok(Self { http, url, api_key })
    }

    /// Builds the GET request for one question.
    ///
    /// The API key header is omitted when no token is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `reqwest` rejects the request parts.
    pub fn build_request(&self) -> Result<Request, QuizError> {
        let mut builder = self
            .http
            .get(self.url.clone())
            .query(&[("limit", QUESTION_LIMIT)]);

        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key.clone());
        }

        Ok(builder.build()?)
    }
}

#[async_trait]
impl QuizSource for QuizClient {
    async fn fetch_questions(&self) -> Result<Value, QuizError> {
        let request = self.build_request()?;
        info!(url = %self.url, limit = QUESTION_LIMIT, "Requesting quiz questions");

        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Quiz API returned non-success status");
            return Err(QuizError::StatusError(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let text = response.text().await?;
        let payload = decode_payload(text);

        #[cfg(feature = "debug-logs")]
        info!("Quiz API payload: {}", payload);

        Ok(payload)
    }
}

fn api_key_header(token: &str) -> Result<HeaderValue, QuizError> {
    let mut value = HeaderValue::from_str(token)
        .map_err(|e| QuizError::ConfigError(format!("Invalid {API_KEY_HEADER} header: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Parses an upstream body as JSON, relaying it as a plain string otherwise.
///
/// An empty body becomes `""`.
#[must_use]
pub fn decode_payload(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(payload) => payload,
        Err(_) => Value::String(text),
    }
}

/// Turns a payload carrying a non-empty `errors` array into a failure.
///
/// Entries are joined with `,`; string entries are used verbatim, anything
/// else as its JSON text. Payloads without such an array pass through
/// untouched.
///
/// # Errors
///
/// Returns `QuizError::UpstreamError` when the upstream reported errors.
pub fn reject_reported_errors(payload: Value) -> Result<Value, QuizError> {
    let reported = payload
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty())
        .map(|errors| {
            errors
                .iter()
                .map(|e| match e {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(",")
        });

    match reported {
        Some(message) => Err(QuizError::UpstreamError(message)),
        None => Ok(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_with(token: Option<&str>, url: &str) -> AppConfig {
        AppConfig {
            secret_api_key: None,
            quiz_api_token: token.map(ToString::to_string),
            quiz_api_url: url.to_string(),
        }
    }

    #[test]
    fn test_build_request_sets_limit_and_api_key() {
        let config = config_with(Some("token-123"), "https://quizapi.io/api/v1/questions");
        let client = QuizClient::new(&config).unwrap();
        let request = client.build_request().unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().host_str(), Some("quizapi.io"));
        assert_eq!(request.url().path(), "/api/v1/questions");
        assert_eq!(request.url().query(), Some("limit=1"));
        assert_eq!(
            request.headers().get(API_KEY_HEADER).unwrap().to_str().unwrap(),
            "token-123"
        );
        assert!(request.headers().get(API_KEY_HEADER).unwrap().is_sensitive());
    }

    #[test]
    fn test_build_request_omits_header_without_token() {
        let config = config_with(None, "https://quizapi.io/api/v1/questions");
        let client = QuizClient::new(&config).unwrap();
        let request = client.build_request().unwrap();

        assert!(request.headers().get(API_KEY_HEADER).is_none());
        assert_eq!(request.url().query(), Some("limit=1"));
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = config_with(Some("t"), "not a url");
        assert!(matches!(
            QuizClient::new(&config),
            Err(QuizError::ConfigError(_))
        ));

        let config = config_with(Some("t"), "ftp://quizapi.io/questions");
        assert!(matches!(
            QuizClient::new(&config),
            Err(QuizError::ConfigError(_))
        ));
    }

    #[test]
    fn test_new_rejects_token_with_newline() {
        let config = config_with(Some("bad\ntoken"), "https://quizapi.io/api/v1/questions");
        assert!(matches!(
            QuizClient::new(&config),
            Err(QuizError::ConfigError(_))
        ));
    }

    #[test]
    fn test_reject_reported_errors_passes_empty_errors() {
        let payload = json!({"errors": [], "data": [{"id": 1}]});
        assert_eq!(reject_reported_errors(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn test_reject_reported_errors_passes_question_array() {
        let payload = json!([{"id": 7, "question": "What is Rust?"}]);
        assert_eq!(reject_reported_errors(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn test_decode_payload_parses_json() {
        assert_eq!(
            decode_payload(r#"{"errors":[],"data":[1]}"#.to_string()),
            json!({"errors": [], "data": [1]})
        );
    }

    #[test]
    fn test_decode_payload_keeps_non_json_text() {
        assert_eq!(
            decode_payload("<html>oops</html>".to_string()),
            Value::String("<html>oops</html>".to_string())
        );
        assert_eq!(decode_payload(String::new()), Value::String(String::new()));
    }

    #[test]
    fn test_reject_reported_errors_joins_entries() {
        let err = reject_reported_errors(json!({"errors": ["bad token", 42]})).unwrap_err();
        assert!(matches!(err, QuizError::UpstreamError(_)));
        assert_eq!(err.message(), "bad token,42");
    }
}
