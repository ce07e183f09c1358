
mod shorten;
mod transport;

use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand};
use shortener::{BASE_URL_ENV, DEFAULT_BASE_URL, Endpoint, EndpointError};
use tracing_subscriber::EnvFilter;

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] EndpointError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io failed: {0}")]
    Io(#[from] io::Error),
    #[error("{failed} of {total} submissions failed")]
    SubmissionsFailed { failed: usize, total: usize },
}

#[derive(Parser, Debug)]
#[command(name = "shorten", about = "Shorten URLs through a running shortening service")]
struct Cli {
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SHORTENER_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the service answers HTTP at all.
    Ping,
    /// Shorten each URL; reads one URL per line from stdin when none are given.
    Shorten { urls: Vec<String> },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let endpoint = Endpoint::parse(&cli.base_url)?;
    let transport = ReqwestTransport::new(Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Command::Ping => run_ping(&transport, &endpoint).await,
        Command::Shorten { urls } => run_shorten(&transport, &endpoint, urls).await,
    }
}

async fn run_ping(transport: &ReqwestTransport, endpoint: &Endpoint) -> Result<(), CliError> {
    let url = format!("{}/", endpoint.base_url());
    let status = transport.get_status(&url).await?;
    println!("{url} answered HTTP {status}");
    Ok(())
}

async fn run_shorten(
    transport: &ReqwestTransport,
    endpoint: &Endpoint,
    urls: Vec<String>,
) -> Result<(), CliError> {
    let urls = if urls.is_empty() { shorten::read_urls(io::stdin().lock())? } else { urls };

    let summary = shorten::shorten_all(transport, endpoint, &urls, &mut io::stdout(), &mut io::stderr()).await?;
    tracing::debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        last = ?summary.last,
        "shorten finished"
    );

    if summary.failed > 0 {
        return Err(CliError::SubmissionsFailed { failed: summary.failed, total: summary.total() });
    }
    Ok(())
}
