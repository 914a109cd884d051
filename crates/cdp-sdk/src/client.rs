//! Client - API key holder shared by the façades

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ClientConfig;
use crate::transport::Transport;
use crate::SdkError;

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Authenticated client handed to every façade's `init`.
///
/// Immutable after construction; share it with `Arc<Client>`.
pub struct Client {
    api_key: String,
    config: Option<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client using HTTP transport and the default config
    #[cfg(feature = "http")]
    pub fn new(api_key: impl Into<String>) -> Result<Self, SdkError> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client using HTTP transport and a custom config
    #[cfg(feature = "http")]
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self, SdkError> {
        let api_key = checked_api_key(api_key)?;
        let transport = HttpTransport::new(&config)?;
        tracing::debug!(base_url = config.base_url(), "client created");

        Ok(Self {
            api_key,
            config: Some(config),
            transport: Arc::new(transport),
        })
    }

    /// Create a client with a custom transport.
    ///
    /// The transport decides where requests go and how long they may take,
    /// so the client carries no [`ClientConfig`].
    pub fn with_transport(
        api_key: impl Into<String>,
        transport: impl Transport + 'static,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            api_key: checked_api_key(api_key)?,
            config: None,
            transport: Arc::new(transport),
        })
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the config the HTTP transport was built from, `None` for a
    /// custom transport
    pub fn config(&self) -> Option<&ClientConfig> {
        self.config.as_ref()
    }

    /// Get the transport requests are sent through
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

fn checked_api_key(api_key: impl Into<String>) -> Result<String, SdkError> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
        return Err(SdkError::MissingApiKey);
    }
    Ok(api_key)
}

/// Per-façade slot holding the shared client.
///
/// Written by `init`, read by every operation. The read clones the `Arc` so
/// no lock is held across a request.
pub(crate) struct ClientSlot {
    facade: &'static str,
    client: RwLock<Option<Arc<Client>>>,
}

impl ClientSlot {
    pub(crate) fn empty(facade: &'static str) -> Self {
        Self {
            facade,
            client: RwLock::new(None),
        }
    }

    pub(crate) fn with_client(facade: &'static str, client: Arc<Client>) -> Self {
        Self {
            facade,
            client: RwLock::new(Some(client)),
        }
    }

    pub(crate) fn set(&self, client: Arc<Client>) {
        *self.client.write() = Some(client);
        tracing::debug!(facade = self.facade, "initialized");
    }

    pub(crate) fn is_set(&self) -> bool {
        self.client.read().is_some()
    }

    pub(crate) fn get(&self) -> Result<Arc<Client>, SdkError> {
        self.client
            .read()
            .clone()
            .ok_or(SdkError::UninitializedClient {
                facade: self.facade,
            })
    }
}

impl fmt::Debug for ClientSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.facade)
            .field("initialized", &self.is_set())
            .finish()
    }
}
