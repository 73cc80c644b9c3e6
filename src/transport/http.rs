//! reqwest-backed [`Transport`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use super::{Transport, TransportError, encode_form};
use crate::config::ClientConfig;
use crate::user_agent;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP transport for API calls.
///
/// Created once per run and reused, taking advantage of connection pooling.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport using the timeouts from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = build_client(config.connect_timeout, config.read_timeout)
            .map_err(|source| TransportError::Build { source })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(level = "debug", skip(self, form), fields(url = %url))]
    async fn post(&self, url: &str, form: &[(&str, String)]) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(encode_form(form))
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::http_status(url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(url, e))?;
        debug!(bytes = body.len(), "API response received");
        Ok(body.to_vec())
    }
}

/// Builds a reqwest client with the project User-Agent and the given timeouts.
pub(crate) fn build_client(
    connect_timeout: Duration,
    read_timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(read_timeout)
        .gzip(true)
        .user_agent(user_agent::default_user_agent())
        .build()
}
