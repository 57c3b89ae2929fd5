//! Handler that proxies one question request to the quiz API.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::helpers;
use crate::clients::quiz_client::{QuizClient, QuizSource, reject_reported_errors};
use crate::core::config::AppConfig;
use crate::core::models::FunctionResponse;

pub use self::function_handler as handler;

/// Lambda handler for the quiz proxy. The event is ignored.
///
/// # Errors
///
/// Never fails; upstream and configuration failures are answered with a 500.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<FunctionResponse, Error> {
    info!(request_id = %event.context.request_id, "Quiz function invoked");
    let config = AppConfig::from_env();

    let client = match QuizClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize quiz client: {}", e);
            return Ok(failure_response(e.message()));
        }
    };

    Ok(handle_quiz(&client).await)
}

/// Fetches from `source` once and shapes the result into a response.
pub async fn handle_quiz<S>(source: &S) -> FunctionResponse
where
    S: QuizSource + ?Sized,
{
    match source.fetch_questions().await.and_then(reject_reported_errors) {
        Ok(payload) => {
            info!("Quiz API request succeeded");
            helpers::ok_json(&json!({ "response": payload }))
        }
        Err(e) => {
            error!("Quiz API request failed: {}", e);
            failure_response(e.message())
        }
    }
}

fn failure_response(message: &str) -> FunctionResponse {
    helpers::json_response(500, &json!({ "response": message }))
}
