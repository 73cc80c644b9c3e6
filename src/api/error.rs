//! Error types for API calls.

use thiserror::Error;

use super::Endpoint;
use crate::transport::TransportError;

/// Errors returned by [`ApiClient::call`](super::ApiClient::call).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed.
    #[error("{endpoint} request failed: {source}")]
    Transport {
        /// Endpoint being called.
        endpoint: Endpoint,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// Well-formed envelope whose status is not `OK`.
    #[error("{endpoint} returned status {status}{}", describe(.code.as_deref(), .message.as_deref()))]
    Status {
        /// Endpoint being called.
        endpoint: Endpoint,
        /// The `<status>` value, e.g. `FATAL`.
        status: String,
        /// The `<code>` value, when present.
        code: Option<String>,
        /// The `<message>` value, when present.
        message: Option<String>,
        /// Raw response body for diagnostics.
        raw: String,
    },

    /// Body is not XML or lacks the expected envelope fields.
    #[error("{endpoint} returned a malformed XML envelope: {source}")]
    Xml {
        /// Endpoint being called.
        endpoint: Endpoint,
        /// Underlying deserialization error.
        #[source]
        source: quick_xml::DeError,
        /// Raw response body for diagnostics.
        raw: String,
    },

    /// The endpoint URL could not be built from the configured base.
    #[error("cannot build {endpoint} URL: {source}")]
    Url {
        /// Endpoint being called.
        endpoint: Endpoint,
        /// Underlying URL error.
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// The raw response body, for errors that received one.
    #[must_use]
    pub fn raw_payload(&self) -> Option<&str> {
        match self {
            Self::Status { raw, .. } | Self::Xml { raw, .. } => Some(raw),
            Self::Transport { .. } | Self::Url { .. } => None,
        }
    }
}

fn describe(code: Option<&str>, message: Option<&str>) -> String {
    match (code, message) {
        (Some(code), Some(message)) => format!(" ({code}: {message})"),
        (Some(code), None) => format!(" ({code})"),
        (None, Some(message)) => format!(" ({message})"),
        (None, None) => String::new(),
    }
}
