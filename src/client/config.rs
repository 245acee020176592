//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::client::paginated::DEFAULT_PAGE_SIZE;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.mercury.com/api/v1";

/// Configuration for the Mercury client.
///
/// # Example
///
/// ```
/// use mercury_bank::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all API requests.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Page size used by listing streams unless overridden per call.
    pub default_page_size: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(30),
            user_agent: format!("mercury-bank/{} (Rust)", env!("CARGO_PKG_VERSION")),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different base URL (e.g. a sandbox).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the default page size for listing streams.
    pub fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = page_size;
        self
    }
}
