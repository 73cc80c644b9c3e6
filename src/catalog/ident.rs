//! File ident extraction from share URLs.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Pattern locating the ident in a share URL: `file/<ident>/` with at least
/// three alphanumeric characters.
pub const IDENT_PATTERN: &str = r"file/([0-9a-zA-Z]{3,})/";

#[allow(clippy::expect_used)]
static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENT_PATTERN).expect("ident regex is valid")); // Static pattern, safe to panic

/// The share URL does not contain a recognizable file ident.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not get file ident from URL: {url}")]
pub struct IdentParseError {
    /// The URL that was rejected.
    pub url: String,
}

/// Extracts the file ident from a share URL such as
/// `https://webshare.cz/file/abc123/My_File.txt`.
///
/// # Errors
///
/// Returns [`IdentParseError`] when no `file/<ident>/` segment is present.
pub fn extract_ident(share_url: &str) -> Result<&str, IdentParseError> {
    IDENT_REGEX
        .captures(share_url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| IdentParseError {
            url: share_url.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_ident_from_share_url() {
        assert_eq!(
            extract_ident("https://x/file/abc123/My_File.txt").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_extract_ident_with_hash_fragment_url() {
        assert_eq!(
            extract_ident("https://webshare.cz/#/file/4Xa9fT2/movie-avi").unwrap(),
            "4Xa9fT2"
        );
    }

    #[test]
    fn test_extract_ident_rejects_short_ident() {
        let err = extract_ident("https://webshare.cz/file/ab/name").unwrap_err();
        assert_eq!(err.url, "https://webshare.cz/file/ab/name");
    }

    #[test]
    fn test_extract_ident_rejects_missing_trailing_slash() {
        assert!(extract_ident("https://webshare.cz/file/abc123").is_err());
    }

    #[test]
    fn test_extract_ident_rejects_non_alphanumeric_ident() {
        assert!(extract_ident("https://webshare.cz/file/ab-c/name").is_err());
    }

    #[test]
    fn test_extract_ident_rejects_unrelated_url() {
        assert!(extract_ident("https://example.com/download/abc123/").is_err());
    }
}
