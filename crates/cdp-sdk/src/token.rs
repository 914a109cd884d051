//! Token façade

use std::sync::Arc;

use serde::Serialize;

use crate::client::{Client, ClientSlot};
use crate::integrations::token;
use crate::types::{ApiResponse, BlockHeight};
use crate::SdkError;

/// Token balances, transfers, wraps and swaps.
///
/// Transfer, wrap and swap return whatever the service answers (typically a
/// magic link or transaction data for the wallet provider); nothing is
/// signed locally.
///
/// Payload methods take anything serializable: the typed
/// [`TransferPayload`](crate::TransferPayload), [`WrapPayload`](crate::WrapPayload)
/// and [`SwapPayload`](crate::SwapPayload), or a raw `serde_json::Value` when
/// the service accepts fields those types lack.
#[derive(Debug)]
pub struct Token {
    client: ClientSlot,
}

impl Token {
    /// Create an uninitialized façade
    pub fn new() -> Self {
        Self {
            client: ClientSlot::empty("Token"),
        }
    }

    /// Create a façade already initialized with `client`
    pub fn with_client(client: Arc<Client>) -> Self {
        Self {
            client: ClientSlot::with_client("Token", client),
        }
    }

    /// Store the client used by every call. Calling again replaces it.
    pub fn init(&self, client: Arc<Client>) {
        self.client.set(client);
    }

    /// Whether `init` has been called
    pub fn is_initialized(&self) -> bool {
        self.client.is_set()
    }

    /// Get the native token balance of an address or CronosId
    pub async fn get_native_token_balance(&self, address: &str) -> Result<ApiResponse, SdkError> {
        let client = self.client.get()?;
        token::get_native_token_balance(client.transport(), client.api_key(), address).await
    }

    /// Get the ERC20 token balance of an address at a block height
    pub async fn get_erc20_token_balance(
        &self,
        address: &str,
        contract_address: &str,
        block_height: impl Into<BlockHeight>,
    ) -> Result<ApiResponse, SdkError> {
        let client = self.client.get()?;
        let block_height = block_height.into().to_string();
        token::get_erc20_token_balance(
            client.transport(),
            client.api_key(),
            address,
            contract_address,
            &block_height,
        )
        .await
    }

    /// Transfer native or ERC20 tokens
    pub async fn transfer_token<P>(&self, payload: &P) -> Result<ApiResponse, SdkError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let client = self.client.get()?;
        let payload = serde_json::to_value(payload)?;
        token::transfer_token(client.transport(), client.api_key(), &payload).await
    }

    /// Wrap tokens
    pub async fn wrap_token<P>(&self, payload: &P) -> Result<ApiResponse, SdkError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let client = self.client.get()?;
        let payload = serde_json::to_value(payload)?;
        token::wrap_token(client.transport(), client.api_key(), &payload).await
    }

    /// Swap one token for another
    pub async fn swap_token<P>(&self, payload: &P) -> Result<ApiResponse, SdkError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let client = self.client.get()?;
        let payload = serde_json::to_value(payload)?;
        token::swap_token(client.transport(), client.api_key(), &payload).await
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}
