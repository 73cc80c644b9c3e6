//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use webshare_core::config::{API_BASE_ENV, DEFAULT_API_BASE};

/// Default output directory for downloads.
pub const DEFAULT_DIRECTORY: &str = "./download";

/// Search Webshare and batch download files from share links.
///
/// Either pass credentials and a file with one share URL per line to
/// download them, or pass a search term to list matching share URLs.
#[derive(Parser, Debug)]
#[command(name = "webshare-dl")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Search for files and print their share URLs
    #[arg(
        short,
        long,
        value_name = "TERM",
        conflicts_with_all = ["username", "password", "input_file", "directory"]
    )]
    pub search: Option<String>,

    /// Webshare username or e-mail
    #[arg(short, long, required_unless_present = "search")]
    pub username: Option<String>,

    /// Webshare password
    #[arg(short, long, required_unless_present = "search")]
    pub password: Option<String>,

    /// File containing Webshare share URLs to download, one per line
    #[arg(short = 'f', long, value_name = "FILE", required_unless_present = "search")]
    pub input_file: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,

    /// API base URL
    #[arg(long, value_name = "URL", env = API_BASE_ENV, default_value = DEFAULT_API_BASE, hide = true)]
    pub api_url: String,
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print share URLs for `term`.
    Search { term: String },
    /// Log in and download every URL listed in `input_file`.
    Download {
        username: String,
        password: String,
        input_file: PathBuf,
        directory: PathBuf,
    },
}

impl Args {
    /// Resolves the mutually exclusive modes. clap already enforced that the
    /// download arguments are present whenever `--search` is absent.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if let Some(term) = &self.search {
            return Mode::Search { term: term.clone() };
        }
        Mode::Download {
            username: self.username.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            input_file: self.input_file.clone().unwrap_or_default(),
            directory: self.directory.clone(),
        }
    }
}
