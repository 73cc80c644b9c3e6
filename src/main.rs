//! CLI entry point for the webshare-dl tool.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use webshare_core::{
    ApiClient, BatchReport, CatalogClient, ClientConfig, Credentials, DownloadEngine,
    HttpTransport, NoopProgress, ProgressSink, read_url_list, run_batch,
};

mod cli;
mod progress_bar;

use cli::{Args, Mode};
use progress_bar::BarProgress;

/// Process exit outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProcessExit {
    Success,
    Failure,
    Partial,
}

impl From<ProcessExit> for ExitCode {
    fn from(outcome: ProcessExit) -> Self {
        match outcome {
            ProcessExit::Success => ExitCode::SUCCESS,
            ProcessExit::Failure => ExitCode::from(1),
            ProcessExit::Partial => ExitCode::from(3),
        }
    }
}

/// Determines the process exit outcome from completed and failed download counts.
fn determine_exit_outcome(completed: usize, failed: usize) -> ProcessExit {
    if failed == 0 {
        ProcessExit::Success
    } else if completed > 0 {
        ProcessExit::Partial
    } else {
        ProcessExit::Failure
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            error!("{e:#}");
            ProcessExit::Failure.into()
        }
    }
}

async fn run(args: &Args) -> Result<ProcessExit> {
    let config = ClientConfig::with_api_base(&args.api_url)
        .with_context(|| format!("invalid API URL: {}", args.api_url))?;
    let transport = Arc::new(HttpTransport::new(&config)?);
    let api = ApiClient::new(transport, &config);
    debug!(api = %config.api_base, "API client ready");

    match args.mode() {
        Mode::Search { term } => {
            let results = CatalogClient::new(api).search(&term).await?;
            for result in &results {
                println!("{}", result.share_url());
            }
            info!(results = results.len(), "search complete");
            Ok(ProcessExit::Success)
        }
        Mode::Download {
            username,
            password,
            input_file,
            directory,
        } => {
            let mut progress: Box<dyn ProgressSink> = if args.quiet {
                Box::new(NoopProgress)
            } else {
                Box::new(BarProgress::default())
            };
            let report = download(
                &api,
                &Credentials::new(username, password),
                &input_file,
                &directory,
                &mut *progress,
            )
            .await?;
            Ok(determine_exit_outcome(
                report.downloaded.len(),
                report.failed.len(),
            ))
        }
    }
}

async fn download(
    api: &ApiClient,
    credentials: &Credentials,
    input_file: &Path,
    directory: &Path,
    progress: &mut dyn ProgressSink,
) -> Result<BatchReport> {
    let urls = read_url_list(input_file).await?;
    let engine = DownloadEngine::new()?;
    let report = run_batch(api, &engine, credentials, &urls, directory, progress).await?;

    for (url, path) in &report.downloaded {
        info!(url = %url, path = %path.display(), "saved");
    }
    info!(
        downloaded = report.downloaded.len(),
        failed = report.failed.len(),
        total = report.total(),
        "Download complete"
    );
    Ok(report)
}
