//! Token endpoints

use serde_json::Value;

use crate::transport::Transport;
use crate::types::{ApiRequest, ApiResponse, Operation};
use crate::SdkError;

/// Get the native token balance of an address (CronosIds such as `xyz.cro`
/// are accepted)
pub async fn get_native_token_balance(
    transport: &dyn Transport,
    api_key: &str,
    address: &str,
) -> Result<ApiResponse, SdkError> {
    let request = ApiRequest::new(Operation::NativeTokenBalance, api_key).with_query("address", address);
    super::execute(transport, request).await
}

/// Get the ERC20 balance of an address at a block height.
///
/// `block_height` is forwarded verbatim; the service accepts `latest`.
pub async fn get_erc20_token_balance(
    transport: &dyn Transport,
    api_key: &str,
    address: &str,
    contract_address: &str,
    block_height: &str,
) -> Result<ApiResponse, SdkError> {
    let request = ApiRequest::new(Operation::Erc20TokenBalance, api_key)
        .with_query("address", address)
        .with_query("contractAddress", contract_address)
        .with_query("blockHeight", block_height);
    super::execute(transport, request).await
}

/// Transfer a token
pub async fn transfer_token(
    transport: &dyn Transport,
    api_key: &str,
    payload: &Value,
) -> Result<ApiResponse, SdkError> {
    with_payload(transport, api_key, Operation::TransferToken, payload).await
}

/// Wrap a token
pub async fn wrap_token(
    transport: &dyn Transport,
    api_key: &str,
    payload: &Value,
) -> Result<ApiResponse, SdkError> {
    with_payload(transport, api_key, Operation::WrapToken, payload).await
}

/// Swap a token
pub async fn swap_token(
    transport: &dyn Transport,
    api_key: &str,
    payload: &Value,
) -> Result<ApiResponse, SdkError> {
    with_payload(transport, api_key, Operation::SwapToken, payload).await
}

async fn with_payload(
    transport: &dyn Transport,
    api_key: &str,
    operation: Operation,
    payload: &Value,
) -> Result<ApiResponse, SdkError> {
    let request = ApiRequest::new(operation, api_key).with_body(payload.clone());
    super::execute(transport, request).await
}
