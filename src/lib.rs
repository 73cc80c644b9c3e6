//! Webshare Core Library
//!
//! This library implements a client for the Webshare file-hosting API:
//! logging in with the service's challenge/response password digests,
//! searching the catalog, resolving share links to direct download URLs,
//! and streaming those files to disk.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`transport`] - Form-encoded HTTP POST seam used by every API call
//! - [`api`] - XML envelope parsing into typed per-endpoint responses
//! - [`auth`] - Credentials, password digests and the login handshake
//! - [`catalog`] - Search, share-link ident extraction and link resolution
//! - [`download`] - Streaming download engine with progress reporting
//! - [`batch`] - Sequential batch pipeline over a list of share URLs

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod auth;
pub mod batch;
pub mod catalog;
pub mod config;
pub mod download;
pub mod transport;
mod user_agent;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, Endpoint};
pub use auth::{AuthError, Credentials, PasswordDigest, Session, login};
pub use batch::{BatchError, BatchReport, ItemError, read_url_list, run_batch};
pub use catalog::{CatalogClient, CatalogError, IdentParseError, SearchResult, share_url};
pub use config::ClientConfig;
pub use download::{
    DownloadEngine, DownloadError, NoopProgress, ProgressSink, ProgressTracker,
};
pub use transport::{HttpTransport, Transport, TransportError};
