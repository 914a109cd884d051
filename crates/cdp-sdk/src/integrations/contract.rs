//! Contract endpoints

use crate::transport::Transport;
use crate::types::{ApiRequest, ApiResponse, Operation};
use crate::SdkError;

/// Get the ABI of a smart contract.
///
/// `explorer_key` is the block explorer API key the service uses to look up
/// verified sources.
pub async fn get_contract_abi(
    transport: &dyn Transport,
    api_key: &str,
    contract_address: &str,
    explorer_key: &str,
) -> Result<ApiResponse, SdkError> {
    let request = ApiRequest::new(Operation::ContractAbi, api_key)
        .with_query("contractAddress", contract_address)
        .with_query("explorerKey", explorer_key);
    super::execute(transport, request).await
}

/// Get the deployed bytecode of a smart contract
pub async fn get_contract_code(
    transport: &dyn Transport,
    api_key: &str,
    contract_address: &str,
) -> Result<ApiResponse, SdkError> {
    let request = ApiRequest::new(Operation::ContractCode, api_key)
        .with_query("contractAddress", contract_address);
    super::execute(transport, request).await
}
