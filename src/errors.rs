use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Quiz API returned an error status: {0}")]
    StatusError(String),

    #[error("Quiz API reported errors: {0}")]
    UpstreamError(String),

    #[error("Failed to decode quiz API response: {0}")]
    DecodeError(String),

    #[error("Invalid quiz API configuration: {0}")]
    ConfigError(String),
}

impl QuizError {
    /// The bare error text relayed to callers in the response body.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            QuizError::HttpError(msg)
            | QuizError::StatusError(msg)
            | QuizError::UpstreamError(msg)
            | QuizError::DecodeError(msg)
            | QuizError::ConfigError(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for QuizError {
    fn from(error: reqwest::Error) -> Self {
        let message = describe_with_sources(&error);
        if error.is_decode() {
            QuizError::DecodeError(message)
        } else {
            QuizError::HttpError(message)
        }
    }
}

/// Renders an error followed by its `source()` chain, joined with `: `.
///
/// A cause whose text already appears in the message is skipped.
pub(crate) fn describe_with_sources(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<url::ParseError> for QuizError {
    fn from(error: url::ParseError) -> Self {
        QuizError::ConfigError(error.to_string())
    }
}
