//! Streaming download of a resolved link into a destination directory.
//!
//! The body goes to a process-specific temporary file while the response
//! headers are captured to a side file. Once the transfer completes, the
//! filename announced in `Content-Disposition` is read back from that side
//! file and the content file is renamed to it. On any failure both temporary
//! files are left behind for inspection.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};
use url::Url;

use super::constants::{
    CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, TEMP_CONTENT_PREFIX, TEMP_HEADERS_PREFIX,
};
use super::error::DownloadError;
use super::filename::{filename_from_headers, sanitize_filename};
use super::progress::{ProgressSink, ProgressTracker};
use crate::transport::TransportError;
use crate::transport::http::build_client;

/// Temporary file pair for one download, suffixed with the process id.
///
/// Two downloads running at once in the same process would share these
/// names, so downloads must run one after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempPaths {
    /// Receives the response body.
    pub content: PathBuf,
    /// Receives the raw response headers.
    pub headers: PathBuf,
}

impl TempPaths {
    /// Temp paths inside `dir` for the current process.
    #[must_use]
    pub fn for_process(dir: &Path) -> Self {
        Self::with_suffix(dir, std::process::id())
    }

    fn with_suffix(dir: &Path, suffix: u32) -> Self {
        Self {
            content: dir.join(format!("{TEMP_CONTENT_PREFIX}{suffix}")),
            headers: dir.join(format!("{TEMP_HEADERS_PREFIX}{suffix}")),
        }
    }
}

/// Downloads direct links to disk, one at a time.
#[derive(Debug, Clone)]
pub struct DownloadEngine {
    client: Client,
}

impl DownloadEngine {
    /// Creates an engine with the default download timeouts
    /// (30 s connect, 5 min per request).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeouts(
            Duration::from_secs(CONNECT_TIMEOUT_SECS),
            Duration::from_secs(READ_TIMEOUT_SECS),
        )
    }

    /// Creates an engine with explicit timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the HTTP client cannot be built.
    pub fn with_timeouts(
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = build_client(connect_timeout, read_timeout)
            .map_err(|source| TransportError::Build { source })?;
        Ok(Self { client })
    }

    /// Downloads `url` into `dest_dir` and returns the final path.
    ///
    /// # Errors
    ///
    /// - [`DownloadError::InvalidUrl`] if `url` does not parse
    /// - [`DownloadError::Io`] if the directory or temp files cannot be created or written
    /// - [`DownloadError::Transfer`] if the request or body stream fails
    /// - [`DownloadError::HeaderParse`] if no filename is announced
    #[instrument(skip(self, progress), fields(url = %url, dir = %dest_dir.display()))]
    pub async fn download(
        &self,
        url: &str,
        dest_dir: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<PathBuf, DownloadError> {
        Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;

        tokio::fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| DownloadError::io(dest_dir, e))?;

        let temp = TempPaths::for_process(dest_dir);
        let content_file = File::create(&temp.content)
            .await
            .map_err(|e| DownloadError::io(&temp.content, e))?;
        let mut headers_file = File::create(&temp.headers)
            .await
            .map_err(|e| DownloadError::io(&temp.headers, e))?;
        debug!(content = %temp.content.display(), headers = %temp.headers.display(), "temp files created");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::transfer(url, TransportError::from_reqwest(url, e)))?;

        write_headers(&mut headers_file, &response, &temp.headers).await?;
        drop(headers_file);

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::transfer(
                url,
                TransportError::http_status(url, status.as_u16()),
            ));
        }

        let total = response.content_length();
        progress.started(url, total);
        let mut tracker = ProgressTracker::new();
        tracker.update_into(0, total, progress);

        let bytes =
            stream_to_file(content_file, response, url, &temp.content, total, &mut tracker, progress)
                .await?;
        progress.finished();

        let headers = tokio::fs::read_to_string(&temp.headers)
            .await
            .map_err(|e| DownloadError::io(&temp.headers, e))?;
        let filename = filename_from_headers(&headers).ok_or_else(|| DownloadError::HeaderParse {
            headers_path: temp.headers.clone(),
            content_path: temp.content.clone(),
        })?;

        let final_path = dest_dir.join(sanitize_filename(&filename));
        tokio::fs::rename(&temp.content, &final_path)
            .await
            .map_err(|e| DownloadError::io(&final_path, e))?;
        tokio::fs::remove_file(&temp.headers)
            .await
            .map_err(|e| DownloadError::io(&temp.headers, e))?;

        info!(path = %final_path.display(), bytes, "download complete");
        Ok(final_path)
    }
}

/// Writes the status line and every header as `Name: value` lines.
async fn write_headers(
    file: &mut File,
    response: &reqwest::Response,
    path: &Path,
) -> Result<(), DownloadError> {
    let mut blob = format!("{:?} {}\r\n", response.version(), response.status());
    for (name, value) in response.headers() {
        blob.push_str(name.as_str());
        blob.push_str(": ");
        blob.push_str(&String::from_utf8_lossy(value.as_bytes()));
        blob.push_str("\r\n");
    }
    blob.push_str("\r\n");

    file.write_all(blob.as_bytes())
        .await
        .map_err(|e| DownloadError::io(path, e))?;
    file.flush().await.map_err(|e| DownloadError::io(path, e))
}

/// Streams the response body to `file`, feeding progress after every chunk.
async fn stream_to_file(
    file: File,
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
    total: Option<u64>,
    tracker: &mut ProgressTracker,
    progress: &mut dyn ProgressSink,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result
            .map_err(|e| DownloadError::transfer(url, TransportError::from_reqwest(url, e)))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(file_path, e))?;

        bytes_written += chunk.len() as u64;
        tracker.update_into(bytes_written, total, progress);
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(file_path, e))?;

    Ok(bytes_written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_paths_are_suffixed_with_pid() {
        let paths = TempPaths::with_suffix(Path::new("/dl"), 4242);
        assert_eq!(paths.content, PathBuf::from("/dl/tmpfile4242"));
        assert_eq!(paths.headers, PathBuf::from("/dl/tmpfileHeaders4242"));
    }

    #[test]
    fn test_temp_paths_for_process_use_current_pid() {
        let paths = TempPaths::for_process(Path::new("out"));
        let pid = std::process::id().to_string();
        assert!(paths.content.to_string_lossy().ends_with(&pid));
        assert!(paths.headers.to_string_lossy().ends_with(&pid));
        assert_ne!(paths.content, paths.headers);
    }
}
