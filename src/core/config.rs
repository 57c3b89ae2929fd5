use std::env;

pub const DEFAULT_QUIZ_API_URL: &str = "https://quizapi.io/api/v1/questions";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub secret_api_key: Option<String>,
    pub quiz_api_token: Option<String>,
    pub quiz_api_url: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Missing keys are left as `None`; nothing here fails.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret_api_key: lookup("SECRET_API_KEY"),
            quiz_api_token: lookup("QUIZ_API_TOKEN"),
            quiz_api_url: lookup("QUIZ_API_URL")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_QUIZ_API_URL.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_api_key: None,
            quiz_api_token: None,
            quiz_api_url: DEFAULT_QUIZ_API_URL.to_string(),
        }
    }
}
