//! # cdp-sdk
//!
//! Rust SDK for the Crypto.com Developer Platform API.
//!
//! ## Features
//!
//! - **Client**: holds the API key and the transport every request goes through
//! - **Contract**: contract ABI and bytecode lookups
//! - **Token**: native/ERC20 balances, transfer, wrap and swap
//! - **Transport**: pluggable request layer (`HttpTransport`, `MockTransport`)
//!
//! Every operation returns the service's JSON payload on 200/201. Any other
//! status becomes [`SdkError::Remote`], whose message is the server's `error`
//! field or `HTTP error! status: <code>`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cdp_sdk::{Client, Contract, Token, TransferPayload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(Client::new("your-api-key")?);
//!
//!     let contract = Contract::new();
//!     let token = Token::new();
//!     contract.init(client.clone());
//!     token.init(client);
//!
//!     let balance = token.get_native_token_balance("xyz.cro").await?;
//!     println!("Balance: {}", balance);
//!
//!     let code = contract
//!         .get_contract_code("0x5C7F8A570d578ED84E63fdFA7b1eE72dEae1AE23")
//!         .await?;
//!     println!("Code: {}", code);
//!
//!     let transfer = token
//!         .transfer_token(&TransferPayload::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d", 1.0))
//!         .await?;
//!     println!("Transfer: {}", transfer);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! ```rust
//! use std::sync::Arc;
//! use cdp_sdk::{Client, MockTransport, Operation, Token};
//! use serde_json::json;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let transport = MockTransport::new();
//! transport.set_json(Operation::NativeTokenBalance, 200, json!({"balance": "100"}));
//!
//! let token = Token::with_client(Arc::new(Client::with_transport("k", transport).unwrap()));
//! let balance = token.get_native_token_balance("xyz.cro").await.unwrap();
//! assert_eq!(balance, json!({"balance": "100"}));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod config;
mod contract;
mod error;
pub mod integrations;
pub mod response;
mod token;
mod transport;
pub mod types;

// Re-export main types
pub use client::Client;
pub use config::ClientConfig;
pub use contract::Contract;
pub use error::SdkError;
pub use response::deserialize_response;
pub use token::Token;
pub use transport::MockTransport;

/// Re-export Transport trait for custom implementations
pub use transport::Transport;
pub use types::{
    ApiRequest, ApiResponse, BlockHeight, HttpMethod, Operation, RawResponse, SwapPayload, TransferPayload,
    WrapPayload, API_URL,
};

#[cfg(feature = "http")]
pub use transport::HttpTransport;
