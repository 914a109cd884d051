//! SDK types

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Base URL of the Developer Platform API
pub const API_URL: &str = "https://developer-platform-api.crypto.com/api/v1/cdc-developer-platform";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Payload returned by the service, opaque beyond success/failure
pub type ApiResponse = Value;

/// HTTP method a request is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// Remote operations exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Contract ABI lookup
    ContractAbi,
    /// Contract bytecode lookup
    ContractCode,
    /// Native token balance of an address
    NativeTokenBalance,
    /// ERC20 token balance of an address
    Erc20TokenBalance,
    /// Token transfer
    TransferToken,
    /// Token wrap
    WrapToken,
    /// Token swap
    SwapToken,
}

impl Operation {
    /// All operations, in declaration order
    pub const ALL: [Operation; 7] = [
        Operation::ContractAbi,
        Operation::ContractCode,
        Operation::NativeTokenBalance,
        Operation::Erc20TokenBalance,
        Operation::TransferToken,
        Operation::WrapToken,
        Operation::SwapToken,
    ];

    /// Method-style name, used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ContractAbi => "get_contract_abi",
            Operation::ContractCode => "get_contract_code",
            Operation::NativeTokenBalance => "get_native_token_balance",
            Operation::Erc20TokenBalance => "get_erc20_token_balance",
            Operation::TransferToken => "transfer_token",
            Operation::WrapToken => "wrap_token",
            Operation::SwapToken => "swap_token",
        }
    }

    /// Endpoint path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Operation::ContractAbi => "/contract/abi",
            Operation::ContractCode => "/contract/bytecode",
            Operation::NativeTokenBalance => "/token/native-token-balance",
            Operation::Erc20TokenBalance => "/token/erc20-token-balance",
            Operation::TransferToken => "/token/transfer",
            Operation::WrapToken => "/token/wrap",
            Operation::SwapToken => "/token/swap",
        }
    }

    /// HTTP method the service expects.
    ///
    /// Every endpoint is GET, including transfer/wrap/swap which carry a
    /// JSON body.
    pub fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Whether the operation carries a JSON body
    pub fn has_body(&self) -> bool {
        matches!(
            self,
            Operation::TransferToken | Operation::WrapToken | Operation::SwapToken
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single request handed to a [`Transport`](crate::Transport)
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    /// Operation being performed
    pub operation: Operation,
    /// HTTP method, taken from the operation
    pub method: HttpMethod,
    /// Query string pairs, in order
    pub query: Vec<(&'static str, String)>,
    /// API key sent in the `x-api-key` header
    pub api_key: String,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without query or body
    pub fn new(operation: Operation, api_key: impl Into<String>) -> Self {
        Self {
            operation,
            method: operation.method(),
            query: Vec::new(),
            api_key: api_key.into(),
            body: None,
        }
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Override the HTTP method
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Attach a JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Endpoint path
    pub fn path(&self) -> &'static str {
        self.operation.path()
    }

    /// Value of a query parameter
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Path and query as they appear on the wire (without percent-encoding)
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path().to_string();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path(), query)
    }
}

// Keeps the API key out of logs and panic messages.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("operation", &self.operation)
            .field("method", &self.method)
            .field("query", &self.query)
            .field("api_key", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

/// Raw transport result: status code and unparsed body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

impl RawResponse {
    /// Create a raw response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Create a raw response with a JSON body
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }
}

/// Block height for balance queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockHeight {
    /// Latest block
    #[default]
    Latest,
    /// Block number
    Number(u64),
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockHeight::Latest => f.write_str("latest"),
            BlockHeight::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<u64> for BlockHeight {
    fn from(n: u64) -> Self {
        BlockHeight::Number(n)
    }
}

/// Body of a token transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPayload {
    /// Recipient address or CronosId
    pub to: String,
    /// Amount to transfer
    pub amount: f64,
    /// ERC20 contract; native token when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    /// Wallet provider identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl TransferPayload {
    /// Native token transfer
    pub fn new(to: impl Into<String>, amount: f64) -> Self {
        Self {
            to: to.into(),
            amount,
            contract_address: None,
            provider: None,
        }
    }

    /// Transfer an ERC20 token instead of the native token
    pub fn contract_address(mut self, contract_address: impl Into<String>) -> Self {
        self.contract_address = Some(contract_address.into());
        self
    }

    /// Set the wallet provider
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Body of a token wrap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapPayload {
    /// Token being wrapped
    pub from_contract_address: String,
    /// Wrapped token contract
    pub to_contract_address: String,
    /// Amount to wrap
    pub amount: f64,
    /// Wallet provider identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl WrapPayload {
    /// Create a wrap payload
    pub fn new(
        from_contract_address: impl Into<String>,
        to_contract_address: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            from_contract_address: from_contract_address.into(),
            to_contract_address: to_contract_address.into(),
            amount,
            provider: None,
        }
    }

    /// Set the wallet provider
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Body of a token swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapPayload {
    /// Token sold
    pub from_contract_address: String,
    /// Token bought
    pub to_contract_address: String,
    /// Amount of the sold token
    pub amount: f64,
    /// Wallet provider identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl SwapPayload {
    /// Create a swap payload
    pub fn new(
        from_contract_address: impl Into<String>,
        to_contract_address: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            from_contract_address: from_contract_address.into(),
            to_contract_address: to_contract_address.into(),
            amount,
            provider: None,
        }
    }

    /// Set the wallet provider
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}
