//! Response builders shared by the function handlers.

use serde_json::Value;

use crate::core::models::FunctionResponse;

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok_json(body: &Value) -> FunctionResponse {
    json_response(200, body)
}

/// Returns a response with the given status code and JSON body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> FunctionResponse {
    FunctionResponse {
        status_code,
        body: body.to_string(),
    }
}
