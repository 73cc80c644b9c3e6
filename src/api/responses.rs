//! Typed payloads, one per endpoint.
//!
//! Unknown elements in a response are ignored, so the service can add fields
//! without breaking the client.

use serde::Deserialize;

/// Payload of the `salt` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaltResponse {
    /// Per-user salt for the MD5-crypt password digest.
    pub salt: String,
}

/// Payload of the `login` endpoint.
///
/// The token may be absent or empty; [`crate::auth::login`] rejects both.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Session token (`wst`) for authenticated calls.
    #[serde(default)]
    pub token: Option<String>,
}

/// Payload of the `search` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches reported by the service.
    #[serde(default)]
    pub total: Option<u64>,
    /// Matched files, in service order.
    #[serde(default, rename = "file")]
    pub files: Vec<FileNode>,
}

/// One `<file>` node of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileNode {
    /// Opaque file identifier.
    pub ident: String,
    /// Display name.
    pub name: String,
}

/// Payload of the `file_link` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileLinkResponse {
    /// Direct download URL.
    pub link: String,
}
