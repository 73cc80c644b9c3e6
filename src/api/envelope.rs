//! Envelope status check and typed payload decoding.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{ApiError, Endpoint};

/// Envelope status value that marks a successful call.
pub const STATUS_OK: &str = "OK";

/// Fields present in every envelope, successful or not.
#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Parses an API response body into the payload type `R`.
///
/// The status is checked before the payload is decoded, so an error envelope
/// never fails with a confusing "missing field" message.
///
/// # Errors
///
/// Returns [`ApiError::Xml`] for malformed bodies and [`ApiError::Status`]
/// when the status is anything other than [`STATUS_OK`].
pub fn parse_response<R>(endpoint: Endpoint, body: &[u8]) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    let raw = String::from_utf8_lossy(body).into_owned();

    let envelope: EnvelopeStatus = match quick_xml::de::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(source) => return Err(ApiError::Xml { endpoint, source, raw }),
    };

    if envelope.status.trim() != STATUS_OK {
        return Err(ApiError::Status {
            endpoint,
            status: envelope.status.trim().to_string(),
            code: envelope.code,
            message: envelope.message,
            raw,
        });
    }

    match quick_xml::de::from_str(&raw) {
        Ok(payload) => Ok(payload),
        Err(source) => Err(ApiError::Xml { endpoint, source, raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::responses::{SaltResponse, SearchResponse};

    #[test]
    fn test_parse_ok_envelope_into_typed_payload() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
<response><status>OK</status><salt>UX9gSjVl</salt></response>"#;
        let salt: SaltResponse = parse_response(Endpoint::Salt, body).unwrap();
        assert_eq!(salt.salt, "UX9gSjVl");
    }

    #[test]
    fn test_parse_fatal_envelope_is_status_error_with_raw_payload() {
        let body = b"<response><status>FATAL</status><code>LOGIN_FATAL_1</code>\
<message>Wrong password.</message></response>";
        let err = parse_response::<SaltResponse>(Endpoint::Login, body).unwrap_err();
        match &err {
            ApiError::Status {
                endpoint,
                status,
                code,
                message,
                raw,
            } => {
                assert_eq!(*endpoint, Endpoint::Login);
                assert_eq!(status, "FATAL");
                assert_eq!(code.as_deref(), Some("LOGIN_FATAL_1"));
                assert_eq!(message.as_deref(), Some("Wrong password."));
                assert!(raw.contains("LOGIN_FATAL_1"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_mismatched_tags_is_xml_error() {
        let body = b"<response><status>OK</stat></response>";
        let err = parse_response::<SaltResponse>(Endpoint::Salt, body).unwrap_err();
        assert!(matches!(err, ApiError::Xml { .. }), "got {err:?}");
    }

    #[test]
    fn test_parse_envelope_without_status_is_xml_error() {
        let body = b"<response><salt>abc</salt></response>";
        let err = parse_response::<SaltResponse>(Endpoint::Salt, body).unwrap_err();
        assert!(matches!(err, ApiError::Xml { .. }), "got {err:?}");
    }

    #[test]
    fn test_parse_ok_envelope_missing_payload_field_is_xml_error() {
        let body = b"<response><status>OK</status></response>";
        let err = parse_response::<SaltResponse>(Endpoint::Salt, body).unwrap_err();
        assert!(matches!(err, ApiError::Xml { .. }), "got {err:?}");
    }

    #[test]
    fn test_parse_search_ignores_unknown_elements() {
        let body = b"<response><status>OK</status><total>2</total>\
<file><ident>aB3dE5</ident><name>first.avi</name><size>100</size></file>\
<file><ident>Zz9yY8</ident><name>second.mkv</name><img>x</img></file>\
<app_version>30</app_version></response>";
        let search: SearchResponse = parse_response(Endpoint::Search, body).unwrap();
        assert_eq!(search.total, Some(2));
        assert_eq!(search.files.len(), 2);
        assert_eq!(search.files[1].ident, "Zz9yY8");
    }
}
