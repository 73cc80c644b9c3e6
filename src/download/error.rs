//! Error types for the download module.

use std::path::PathBuf;

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while downloading one file.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The direct link is malformed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// File system error (create directory, create temp file, write, rename).
    #[error("IO error on {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The transfer failed; temporary files are left in place.
    #[error("download of {url} failed: {source}")]
    Transfer {
        /// The direct link being downloaded.
        url: String,
        /// The underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The transfer succeeded but no filename could be derived from the headers.
    #[error(
        "could not get filename from response headers in {}; content kept at {}",
        .headers_path.display(),
        .content_path.display()
    )]
    HeaderParse {
        /// Captured headers file.
        headers_path: PathBuf,
        /// Temporary content file.
        content_path: PathBuf,
    },
}

impl DownloadError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a transfer error.
    pub fn transfer(url: impl Into<String>, source: TransportError) -> Self {
        Self::Transfer {
            url: url.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}
