//! Constants for the download module (timeouts, temp file names).

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP read timeout (5 minutes for large files).
pub const READ_TIMEOUT_SECS: u64 = 300;

/// Prefix of the temporary content file; the process id is appended.
pub const TEMP_CONTENT_PREFIX: &str = "tmpfile";

/// Prefix of the temporary headers file; the process id is appended.
pub const TEMP_HEADERS_PREFIX: &str = "tmpfileHeaders";
