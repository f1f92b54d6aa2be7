//! Client configuration

/// Client configuration for connecting to the restaurant API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:5012")
    pub base_url: String,

    /// Base URL for the bulk reference data (`/tables`, `/products`).
    /// Falls back to `base_url` when unset.
    pub reference_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Push channel TCP address (e.g., "127.0.0.1:5013")
    pub push_addr: Option<String>,

    /// Name announced in the push channel handshake
    pub client_name: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            reference_url: None,
            timeout: 30,
            push_addr: None,
            client_name: "coral-floor".to_string(),
        }
    }

    /// Serve reference data from a different host
    pub fn with_reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = Some(url.into());
        self
    }

    /// Set the push channel address
    pub fn with_push_addr(mut self, addr: impl Into<String>) -> Self {
        self.push_addr = Some(addr.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the handshake client name
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Effective reference-data base URL
    pub fn reference_base(&self) -> &str {
        self.reference_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }

    /// Connect the push channel from this configuration
    pub async fn build_message_client(&self) -> Result<super::MessageClient, super::MessageError> {
        let addr = self.push_addr.as_deref().ok_or_else(|| {
            super::MessageError::Connection("Push channel requires push_addr configuration".into())
        })?;
        super::MessageClient::connect(addr, &self.client_name).await
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5012")
    }
}
