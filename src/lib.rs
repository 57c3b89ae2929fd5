//! Quiz functions - two small serverless handlers deployed as AWS Lambdas.
//!
//! 1. `almost-secret` returns the configured `SECRET_API_KEY` as JSON
//! 2. `quizapi` fetches one question from quizapi.io with `QUIZ_API_TOKEN`
//!    and relays the payload, or a 500 carrying the failure message
//!
//! # Example
//!
//! ```no_run
//! use quiz_functions::api::quiz_handler::handle_quiz;
//! use quiz_functions::clients::QuizClient;
//! use quiz_functions::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     quiz_functions::setup_logging();
//!
//!     let config = AppConfig {
//!         secret_api_key: None,
//!         quiz_api_token: Some("dummy_token".to_string()),
//!         quiz_api_url: "https://quizapi.io/api/v1/questions".to_string(),
//!     };
//!
//!     let client = QuizClient::new(&config)?;
//!     let response = handle_quiz(&client).await;
//!     println!("{}: {}", response.status_code, response.body);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Call once at startup, before handing the handler to `lambda_runtime`.
///
/// # Example
///
/// ```
/// quiz_functions::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();
}
