//! Webshare API calls and their XML envelopes.
//!
//! Every endpoint answers with a `<response>` document whose `<status>`
//! element must be `OK`; anything else is a hard failure. [`ApiClient`]
//! joins the endpoint onto the configured base URL, posts the form through a
//! [`Transport`], checks the status and deserializes the payload into the
//! typed response for that endpoint (see [`responses`]).

mod envelope;
mod error;
pub mod responses;

pub use envelope::{STATUS_OK, parse_response};
pub use error::ApiError;
pub use responses::{FileLinkResponse, LoginResponse, SaltResponse, SearchResponse};

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::transport::Transport;

/// The API endpoints this client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Obtain the per-user password salt.
    Salt,
    /// Exchange password digests for a session token.
    Login,
    /// Full-text catalog search.
    Search,
    /// Resolve a file ident to a direct download link.
    FileLink,
}

impl Endpoint {
    /// The endpoint's path segment under the API base.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Salt => "salt",
            Self::Login => "login",
            Self::Search => "search",
            Self::FileLink => "file_link",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thin client that turns endpoint calls into typed responses.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base: Url,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            transport,
            base: config.api_base.clone(),
        }
    }

    /// Returns the full URL for `endpoint` (always with a trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Url`] if the endpoint cannot be joined onto the base.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ApiError> {
        self.base
            .join(&format!("{endpoint}/"))
            .map_err(|source| ApiError::Url { endpoint, source })
    }

    /// Calls `endpoint` with `form` and parses the payload into `R`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when the request fails
    /// - [`ApiError::Status`] when the envelope status is not `OK`
    /// - [`ApiError::Xml`] when the body is not a well-formed envelope
    #[instrument(level = "debug", skip(self, form), fields(endpoint = %endpoint))]
    pub async fn call<R>(&self, endpoint: Endpoint, form: &[(&str, String)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        let body = self
            .transport
            .post(url.as_str(), form)
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        debug!(bytes = body.len(), "parsing API envelope");
        parse_response(endpoint, &body)
    }
}
