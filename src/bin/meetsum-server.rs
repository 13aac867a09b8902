//! HTTP server binary for meetsum.
//!
//! A thin shim over the library crate that maps flags and environment
//! variables to a `SummarizeConfig` and serves the axum router.

use anyhow::{Context, Result};
use clap::Parser;
use meetsum::server::{run, AppState};
use meetsum::SummarizeConfig;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "meetsum-server",
    about = "Summarize meeting-transcript PDFs over HTTP",
    version
)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 10000)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Gemini model identifier.
    #[arg(long, env = "MEETSUM_MODEL", default_value = "gemini-2.0-flash-exp")]
    model: String,

    /// Deadline on each summarization call, in seconds.
    #[arg(long, default_value_t = 60)]
    api_timeout_secs: u64,

    /// Speaker label rendered bold when it appears as "Name:" in a summary
    /// line. Repeatable.
    #[arg(long = "speaker-label")]
    speaker_labels: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    // Fail fast: a server without a key can never answer a request.
    let api_key = std::env::var("GOOGLE_API_KEY")
        .context("GOOGLE_API_KEY must be set before the server starts")?;

    let config = SummarizeConfig::builder()
        .model(args.model.as_str())
        .api_key(api_key)
        .api_timeout_secs(args.api_timeout_secs)
        .speaker_labels(args.speaker_labels)
        .build()
        .context("invalid configuration")?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;

    tracing::info!(model = %args.model, "starting meetsum-server");
    run(addr, AppState { config })
        .await
        .context("server error")?;

    Ok(())
}
