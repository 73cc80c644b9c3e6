//! Catalog operations: search and share-link resolution.
//!
//! [`CatalogClient::search`] runs an anonymous full-text search;
//! [`CatalogClient::resolve_link`] turns a share URL into a direct download
//! link and needs a [`Session`].

mod ident;
mod share_url;

pub use ident::{IDENT_PATTERN, IdentParseError, extract_ident};
pub use share_url::{sanitize_display_name, share_url, share_url_with_base};

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::api::responses::FileNode;
use crate::api::{ApiClient, ApiError, Endpoint, FileLinkResponse, SearchResponse};
use crate::auth::Session;

/// Fixed page size for searches. No pagination is performed.
pub const SEARCH_LIMIT: usize = 1000;

/// One matched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Opaque file identifier.
    pub ident: String,
    /// Display name.
    pub name: String,
}

impl SearchResult {
    /// Public share URL for this result.
    #[must_use]
    pub fn share_url(&self) -> String {
        share_url(&self.ident, &self.name)
    }
}

impl From<FileNode> for SearchResult {
    fn from(node: FileNode) -> Self {
        Self {
            ident: node.ident,
            name: node.name,
        }
    }
}

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The share URL has no file ident.
    #[error(transparent)]
    Ident(#[from] IdentParseError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Client for the `search` and `file_link` endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    api: ApiClient,
}

impl CatalogClient {
    /// Creates a catalog client on top of `api`.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Searches the catalog for `term`, returning at most [`SEARCH_LIMIT`] results
    /// in service order. No matches is an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the `search` call fails.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<SearchResult>, ApiError> {
        let response: SearchResponse = self
            .api
            .call(
                Endpoint::Search,
                &[
                    ("what", term.to_string()),
                    ("category", String::new()),
                    ("sort", String::new()),
                    ("offset", "0".to_string()),
                    ("limit", SEARCH_LIMIT.to_string()),
                ],
            )
            .await?;

        let results: Vec<SearchResult> =
            response.files.into_iter().map(SearchResult::from).collect();
        debug!(results = results.len(), total = ?response.total, "search finished");
        if results.len() >= SEARCH_LIMIT {
            warn!(
                limit = SEARCH_LIMIT,
                total = ?response.total,
                "search hit the result limit; further matches are not shown"
            );
        }
        Ok(results)
    }

    /// Resolves a share URL to a direct download link.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Ident`] if the URL has no `file/<ident>/` segment
    /// - [`CatalogError::Api`] if the `file_link` call fails
    #[instrument(skip(self, session))]
    pub async fn resolve_link(
        &self,
        session: &Session,
        share_url: &str,
    ) -> Result<String, CatalogError> {
        let ident = extract_ident(share_url)?;
        let FileLinkResponse { link } = self
            .api
            .call::<FileLinkResponse>(
                Endpoint::FileLink,
                &[
                    ("ident", ident.to_string()),
                    ("password", String::new()),
                    ("wst", session.token().to_string()),
                ],
            )
            .await?;
        debug!(ident, "resolved direct link");
        Ok(link.trim().to_string())
    }
}
