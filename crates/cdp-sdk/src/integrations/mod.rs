//! Integration functions: one per remote operation.
//!
//! Each function takes the transport, the API key and the operation's
//! inputs, sends exactly one request and normalizes the response. They hold
//! no state; the façades in [`crate::Contract`] and [`crate::Token`] inject the
//! client's transport and key.

pub mod contract;
pub mod token;

use crate::response::normalize_response;
use crate::transport::Transport;
use crate::types::{ApiRequest, ApiResponse};
use crate::SdkError;

/// Send a request and normalize its response
pub async fn execute(transport: &dyn Transport, request: ApiRequest) -> Result<ApiResponse, SdkError> {
    let operation = request.operation;
    tracing::debug!(%operation, path = request.path(), "sending request");

    let response = transport.send(request).await?;
    tracing::debug!(%operation, status = response.status, "received response");

    normalize_response(operation, response)
}
