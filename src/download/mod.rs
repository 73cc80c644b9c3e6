//! Download engine for resolved direct links.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use webshare_core::download::{DownloadEngine, NoopProgress};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = DownloadEngine::new()?;
//! let path = engine
//!     .download("https://vip.1.dl.wsfiles.cz/abc", Path::new("./download"), &mut NoopProgress)
//!     .await?;
//! println!("Downloaded: {}", path.display());
//! # Ok(())
//! # }
//! ```

mod constants;
mod engine;
mod error;
mod filename;
mod progress;

pub use constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
pub use engine::{DownloadEngine, TempPaths};
pub use error::DownloadError;
pub use filename::{CONTENT_DISPOSITION_PATTERN, filename_from_headers, sanitize_filename};
pub use progress::{NoopProgress, ProgressSink, ProgressTracker, RecordingProgress, percent};
