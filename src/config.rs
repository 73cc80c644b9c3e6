//! Client configuration: API location and network timeouts.

use std::time::Duration;

use url::Url;

/// Public Webshare API base URL. Endpoint names are appended with a trailing slash.
pub const DEFAULT_API_BASE: &str = "https://webshare.cz/api/";

/// Public base used when building share URLs for display.
pub const SHARE_BASE: &str = "https://webshare.cz/";

/// Environment variable that overrides the API base URL.
pub const API_BASE_ENV: &str = "WEBSHARE_API_URL";

/// Default HTTP connect timeout for API calls (10 seconds).
pub const API_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default HTTP read timeout for API calls (30 seconds).
pub const API_READ_TIMEOUT_SECS: u64 = 30;

/// Configuration shared by the API transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint name is joined onto.
    pub api_base: Url,
    /// Connect timeout for API requests.
    pub connect_timeout: Duration,
    /// Whole-request timeout for API requests.
    pub read_timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration pointing at `api_base`.
    ///
    /// A missing trailing slash is added so that `Url::join` keeps the last
    /// path segment (`/api` + `salt/` must become `/api/salt/`).
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when `api_base` is not an absolute URL.
    pub fn with_api_base(api_base: &str) -> Result<Self, url::ParseError> {
        let normalized = if api_base.ends_with('/') {
            api_base.to_string()
        } else {
            format!("{api_base}/")
        };
        Ok(Self {
            api_base: Url::parse(&normalized)?,
            ..Self::default()
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        #[allow(clippy::expect_used)]
        let api_base = Url::parse(DEFAULT_API_BASE).expect("static API base URL is valid");
        Self {
            api_base,
            connect_timeout: Duration::from_secs(API_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(API_READ_TIMEOUT_SECS),
        }
    }
}
