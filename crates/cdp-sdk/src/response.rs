//! Response normalization shared by every operation

use serde_json::Value;

use crate::types::{ApiResponse, Operation, RawResponse};
use crate::SdkError;

/// Status codes treated as success. Other 2xx codes are failures.
pub const SUCCESS_STATUS_CODES: [u16; 2] = [200, 201];

/// Whether a status code counts as success
pub fn is_success(status: u16) -> bool {
    SUCCESS_STATUS_CODES.contains(&status)
}

/// Turn a raw transport result into the parsed payload or an error.
///
/// On 200/201 the body is returned unchanged. Otherwise the body's `error`
/// field becomes the error message, falling back to
/// `HTTP error! status: <code>`.
pub fn normalize_response(
    operation: Operation,
    response: RawResponse,
) -> Result<ApiResponse, SdkError> {
    let status = response.status;

    if is_success(status) {
        return serde_json::from_str(&response.body).map_err(|e| SdkError::Decode {
            operation,
            status,
            message: e.to_string(),
        });
    }

    let message = server_error_message(&response.body)
        .map_err(|e| SdkError::Decode {
            operation,
            status,
            message: e.to_string(),
        })?
        .unwrap_or_else(|| format!("HTTP error! status: {}", status));

    tracing::warn!(%operation, status, %message, "request failed");

    Err(SdkError::Remote {
        operation,
        status,
        message,
    })
}

/// Non-empty `error` string from an error body. An empty body has none.
fn server_error_message(body: &str) -> Result<Option<String>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body)?;
    Ok(value
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_owned))
}

/// Helper to deserialize a payload into a typed struct
pub fn deserialize_response<T: serde::de::DeserializeOwned>(
    value: ApiResponse,
) -> Result<T, SdkError> {
    serde_json::from_value(value).map_err(|e| SdkError::Serialization(e.to_string()))
}
