//! Handler that exposes `SECRET_API_KEY` to the caller.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::info;

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::FunctionResponse;

pub use self::function_handler as handler;

/// Lambda handler for the secret function. The event is ignored.
///
/// # Errors
///
/// Never fails; the `Result` is required by `lambda_runtime`.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<FunctionResponse, Error> {
    info!(request_id = %event.context.request_id, "Secret function invoked");
    let config = AppConfig::from_env();
    Ok(handle_secret(&config))
}

/// Builds the `{"message": ...}` response; an absent key becomes `null`.
#[must_use]
pub fn handle_secret(config: &AppConfig) -> FunctionResponse {
    info!(
        configured = config.secret_api_key.is_some(),
        "Returning SECRET_API_KEY"
    );
    helpers::ok_json(&json!({ "message": config.secret_api_key }))
}
