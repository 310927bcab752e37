//! CLI entry point for catbucket.

use anyhow::{Context, Result};
use catbucket_core::{
    CatClient, RoundTripRequest, StorageConfig, StorageService, run_round_trip,
};
use clap::Parser;
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    debug!(
        breed = %args.breed,
        bucket = %args.bucket,
        region = %args.region,
        "CLI arguments parsed"
    );
    info!("catbucket starting");

    let cats = CatClient::with_timeouts(&args.api_key, args.connect_timeout, args.read_timeout)
        .context("unable to create cat API client")?;

    let mut storage_config = StorageConfig::new(&args.bucket)
        .with_region(&args.region)
        .with_path_style(args.path_style);
    if let Some(endpoint) = &args.endpoint_url {
        storage_config = storage_config.with_endpoint_url(endpoint);
    }
    let storage = StorageService::connect(&storage_config)
        .await
        .context("unable to create storage service")?;

    let mut request = RoundTripRequest::new(&args.breed);
    if let Some(key) = &args.key {
        request = request.with_object_key(key);
    }
    if let Some(output) = &args.output {
        request = request.with_destination(output);
    }

    let report = run_round_trip(&cats, &storage, &request)
        .await
        .context("cat image round trip failed")?;

    info!(
        results = report.results,
        key = %report.object_key,
        uploaded = report.bytes_uploaded,
        downloaded = report.bytes_downloaded,
        destination = %report.destination.display(),
        "Round trip complete"
    );

    Ok(())
}
