//! Reading the list of share URLs to download.

use std::path::Path;

use super::BatchError;

/// Splits `text` into share URLs: one per line, trimmed, blank lines dropped.
#[must_use]
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Reads the URL list file at `path`.
///
/// # Errors
///
/// - [`BatchError::Input`] if the file cannot be read
/// - [`BatchError::NoUrls`] if it contains no URLs
pub async fn read_url_list(path: &Path) -> Result<Vec<String>, BatchError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BatchError::Input {
            path: path.to_path_buf(),
            source,
        })?;
    let urls = parse_url_list(&text);
    if urls.is_empty() {
        return Err(BatchError::NoUrls {
            path: path.to_path_buf(),
        });
    }
    Ok(urls)
}
