//! Sequential batch download of share URLs.
//!
//! Login failure aborts the run; a failure on one URL is logged and the
//! batch moves on to the next one.

mod input;

pub use input::{parse_url_list, read_url_list};

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, instrument};

use crate::api::ApiClient;
use crate::auth::{AuthError, Credentials, Session, login};
use crate::catalog::{CatalogClient, CatalogError};
use crate::download::{DownloadEngine, DownloadError, ProgressSink};

/// Errors that stop the whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The URL list file could not be read.
    #[error("could not read file {}: {source}", .path.display())]
    Input {
        /// Path of the URL list.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The URL list contains no URLs.
    #[error("no valid URLs given in {}", .path.display())]
    NoUrls {
        /// Path of the URL list.
        path: PathBuf,
    },

    /// Login failed; nothing else can succeed without a session.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Failure of a single URL within a batch.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The share URL could not be resolved to a direct link.
    #[error(transparent)]
    Resolve(#[from] CatalogError),

    /// The direct link could not be downloaded.
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Share URL and final path of every downloaded file, in input order.
    pub downloaded: Vec<(String, PathBuf)>,
    /// Share URL and error of every skipped URL, in input order.
    pub failed: Vec<(String, ItemError)>,
}

impl BatchReport {
    /// Whether every URL was downloaded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of URLs processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.downloaded.len() + self.failed.len()
    }
}

/// Logs in and downloads every URL in order into `dest_dir`.
///
/// # Errors
///
/// Returns [`BatchError::Auth`] if login fails. Per-URL failures are recorded
/// in the returned [`BatchReport`] instead.
#[instrument(skip_all, fields(urls = urls.len(), dir = %dest_dir.display()))]
pub async fn run_batch(
    api: &ApiClient,
    engine: &DownloadEngine,
    credentials: &Credentials,
    urls: &[String],
    dest_dir: &Path,
    progress: &mut dyn ProgressSink,
) -> Result<BatchReport, BatchError> {
    let session = login(api, credentials).await?;
    let catalog = CatalogClient::new(api.clone());

    let mut report = BatchReport::default();
    for url in urls {
        info!("Downloading {url} ...");
        match download_one(&catalog, engine, &session, url, dest_dir, progress).await {
            Ok(path) => report.downloaded.push((url.clone(), path)),
            Err(e) => {
                error!(url = %url, error = %e, "skipping URL");
                report.failed.push((url.clone(), e));
            }
        }
    }

    info!(
        downloaded = report.downloaded.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}

async fn download_one(
    catalog: &CatalogClient,
    engine: &DownloadEngine,
    session: &Session,
    share_url: &str,
    dest_dir: &Path,
    progress: &mut dyn ProgressSink,
) -> Result<PathBuf, ItemError> {
    let link = catalog.resolve_link(session, share_url).await?;
    let path = engine.download(&link, dest_dir, progress).await?;
    Ok(path)
}
