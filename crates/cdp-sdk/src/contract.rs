//! Contract façade

use std::sync::Arc;

use crate::client::{Client, ClientSlot};
use crate::integrations::contract;
use crate::types::ApiResponse;
use crate::SdkError;

/// Smart contract lookups (ABI and bytecode).
///
/// Holds its own client slot; share one `Contract` across tasks with `Arc`.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use cdp_sdk::{Client, Contract};
///
/// # async fn example() -> Result<(), cdp_sdk::SdkError> {
/// let client = Arc::new(Client::new("api-key")?);
/// let contract = Contract::new();
/// contract.init(client);
///
/// let abi = contract
///     .get_contract_abi("0x5C7F8A570d578ED84E63fdFA7b1eE72dEae1AE23", "explorer-key")
///     .await?;
/// println!("{}", abi);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Contract {
    client: ClientSlot,
}

impl Contract {
    /// Create an uninitialized façade
    pub fn new() -> Self {
        Self {
            client: ClientSlot::empty("Contract"),
        }
    }

    /// Create a façade already initialized with `client`
    pub fn with_client(client: Arc<Client>) -> Self {
        Self {
            client: ClientSlot::with_client("Contract", client),
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

    /// Get the ABI of a smart contract
    pub async fn get_contract_abi(
        &self,
        contract_address: &str,
        explorer_key: &str,
    ) -> Result<ApiResponse, SdkError> {
        let client = self.client.get()?;
        contract::get_contract_abi(client.transport(), client.api_key(), contract_address, explorer_key).await
    }

    /// Get the bytecode of a smart contract
    pub async fn get_contract_code(&self, contract_address: &str) -> Result<ApiResponse, SdkError> {
        let client = self.client.get()?;
        contract::get_contract_code(client.transport(), client.api_key(), contract_address).await
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::new()
    }
}
