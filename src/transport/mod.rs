//! Form-encoded HTTP POST transport.
//!
//! Every Webshare API call is a single POST with an
//! `application/x-www-form-urlencoded` body. [`Transport`] is the seam the
//! rest of the library talks to; [`HttpTransport`] is the reqwest-backed
//! implementation used in production, and tests substitute in-memory ones.

mod error;
pub(crate) mod http;

pub use error::TransportError;
pub use http::HttpTransport;

use async_trait::async_trait;

/// Issues one blocking-in-sequence POST and returns the raw response body.
///
/// Implementations must not retry; every failure surfaces as a
/// [`TransportError`] carrying the underlying cause.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `form` to `url` and returns the response body bytes.
    async fn post(&self, url: &str, form: &[(&str, String)]) -> Result<Vec<u8>, TransportError>;
}

/// Encodes form fields as an `application/x-www-form-urlencoded` body.
#[must_use]
pub fn encode_form(form: &[(&str, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in form {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
