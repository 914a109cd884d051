//! Transport layer for API communication

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{ApiRequest, HttpMethod, Operation, RawResponse};
use crate::SdkError;

/// Transport trait for API communication (object-safe)
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the status code and raw body.
    ///
    /// Non-success status codes are not errors at this layer.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, SdkError>;
}

/// Mock transport for testing.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// [`Client`](crate::Client).
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<Operation, RawResponse>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    /// Create a new mock transport with no responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw response for an operation
    pub fn set_response(&self, operation: Operation, response: RawResponse) {
        self.responses.lock().insert(operation, response);
    }

    /// Set a JSON response for an operation
    pub fn set_json(&self, operation: Operation, status: u16, body: serde_json::Value) {
        self.set_response(operation, RawResponse::json(status, &body));
    }

    /// Clear custom responses
    pub fn clear_responses(&self) {
        self.responses.lock().clear();
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, SdkError> {
        let operation = request.operation;
        self.requests.lock().push(request);

        self.responses
            .lock()
            .get(&operation)
            .cloned()
            .ok_or_else(|| SdkError::Transport {
                operation,
                message: format!("no mock response for {}", operation),
            })
    }
}

/// HTTP transport for real API communication.
///
/// Sends each request with its [`HttpMethod`]; a JSON body is attached
/// whenever present, GET included.
#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: url::Url,
    timeout: std::time::Duration,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: &crate::ClientConfig) -> Result<Self, SdkError> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;
        let timeout = config.timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SdkError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Base URL requests are sent to, always ending with `/`
    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Full URL of an endpoint path, keeping the base URL's own path
    pub fn endpoint(&self, path: &str) -> Result<url::Url, SdkError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", path, e)))
    }

    fn classify(&self, operation: Operation, err: reqwest::Error) -> SdkError {
        if err.is_timeout() {
            SdkError::Timeout {
                operation,
                timeout: self.timeout,
            }
        } else {
            SdkError::Transport {
                operation,
                message: err.to_string(),
            }
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, SdkError> {
        use reqwest::header::CONTENT_TYPE;

        let operation = request.operation;
        let url = self.endpoint(request.path())?;

        let builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        let mut builder = builder
            .header(CONTENT_TYPE, "application/json")
            .header(crate::types::API_KEY_HEADER, request.api_key.as_str());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.classify(operation, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify(operation, e))?;

        Ok(RawResponse::new(status, body))
    }
}
