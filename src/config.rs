//! Client configuration.

use std::time::Duration;

/// Horizon instance serving the public network.
pub const PUBLIC_NET_URL: &str = "https://horizon.stellar.org/";

/// Horizon instance serving the test network.
pub const TEST_NET_URL: &str = "https://horizon-testnet.stellar.org/";

/// Default bound on establishing a TCP/TLS connection.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default bound on buffered (non-streaming) requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration for a [`HorizonClient`](crate::HorizonClient).
///
/// Use the builder methods to customize it.
///
/// # Example
///
/// ```
/// use horizon_client::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::test_net()
///     .with_request_timeout(Duration::from_secs(5))
///     .with_user_agent("ledger-watcher/1.0");
/// assert_eq!(config.horizon_url, "https://horizon-testnet.stellar.org/");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the Horizon instance, with a trailing slash
    pub horizon_url: String,
    /// Timeout for buffered requests; streams are never timed out
    pub request_timeout: Option<Duration>,
    /// Timeout for establishing connections
    pub connect_timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            horizon_url: PUBLIC_NET_URL.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: concat!("horizon-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig pointing at the public network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointing at the test network.
    pub fn test_net() -> Self {
        Self::default().with_horizon_url(TEST_NET_URL)
    }

    /// Set the Horizon base URL. A trailing slash is added if missing.
    pub fn with_horizon_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.horizon_url = url;
        self
    }

    /// Set the timeout for buffered requests.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Remove the timeout for buffered requests.
    pub fn without_request_timeout(mut self) -> Self {
        self.request_timeout = None;
        self
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create config from environment variables.
    ///
    /// - `HORIZON_URL` overrides the base URL
    /// - `HORIZON_TIMEOUT_SECS` overrides the request timeout; `0` disables it
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("HORIZON_URL") {
            if !url.trim().is_empty() {
                config = config.with_horizon_url(url.trim());
            }
        }

        if let Some(secs) = std::env::var("HORIZON_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config = if secs == 0 {
                config.without_request_timeout()
            } else {
                config.with_request_timeout(Duration::from_secs(secs))
            };
        }

        config
    }
}
