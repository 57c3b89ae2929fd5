use serde::{Deserialize, Serialize};

/// Response envelope handed back to the hosting platform.
///
/// `body` holds JSON-encoded text, not a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub body: String,
}
